use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Smallest part the planner will produce, 100 MiB.
pub const DEFAULT_MIN_PART_SIZE: usize = 100 * 1024 * 1024;

/// Number of parts the planner aims to split a body into.
pub const DEFAULT_MAX_PART_COUNT: usize = 100;

/// Receipt of one uploaded part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartReceipt {
    /// 1-based part number.
    pub part_number: u32,
    /// Opaque tag the store returned for the part.
    pub e_tag: String,
}

/// How a body is cut into parts.
///
/// `part_size = max(ceil(len / max_part_count), min_part_size)` and
/// `part_count = ceil(len / part_size)`. With the defaults a body is a single
/// part up to 100 MiB, is cut into 100 MiB parts up to 10000 MiB, and into
/// 100 parts above that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartPlan {
    pub part_size: usize,
    pub part_count: usize,
}

impl PartPlan {
    pub fn new(body_len: usize, min_part_size: usize, max_part_count: usize) -> Self {
        let part_size = body_len
            .div_ceil(max_part_count.max(1))
            .max(min_part_size)
            .max(1);
        Self {
            part_size,
            part_count: body_len.div_ceil(part_size),
        }
    }

    /// Part numbers with the byte range each one covers, in dispatch order.
    pub fn ranges(&self, body_len: usize) -> impl Iterator<Item = (u32, Range<usize>)> {
        let part_size = self.part_size;
        (0..self.part_count).map(move |i| {
            let start = i * part_size;
            let end = (start + part_size).min(body_len);
            (i as u32 + 1, start..end)
        })
    }
}
