/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Common types shared across Gong API responses

use gong_core::wire::WireRecord;
use serde::{Deserialize, Serialize};

/// Pagination envelope carried by every listing response.
///
/// The client never pages on its own; callers pass [`Records::cursor`]
/// back in the next request until it comes back absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Records {
    /// Number of records in the current page
    pub current_page_size: i64,

    /// Number of the current page
    pub current_page_number: i64,

    /// Total number of records matching the request
    pub total_records: i64,

    /// Opaque cursor for the next page, absent on the last page
    pub cursor: Option<String>,
}

impl WireRecord for Records {}

#[cfg(test)]
mod tests {
    use super::*;
    use gong_core::wire::translate;
    use serde_json::json;

    #[test]
    fn test_records_hydrates_from_wire_shape() {
        let raw = translate::inbound(json!({
            "currentPageSize": 100,
            "currentPageNumber": 1,
            "totalRecords": 263,
            "cursor": "eyJhbGciOiJIUzI1NiJ9",
        }));

        let records = Records::from_map(raw).unwrap();
        assert_eq!(records.current_page_size, 100);
        assert_eq!(records.total_records, 263);
        assert_eq!(records.cursor.as_deref(), Some("eyJhbGciOiJIUzI1NiJ9"));
    }

    #[test]
    fn test_records_last_page_has_no_cursor() {
        let raw = translate::inbound(json!({
            "currentPageSize": 63,
            "currentPageNumber": 3,
            "totalRecords": 263,
        }));

        let records = Records::from_map(raw).unwrap();
        assert_eq!(records.cursor, None);
    }
}
