// Copyright 2025 Stratus Cloud Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Helpers to validate and escape path parameters.
//!
//! Path parameters in the Stratus APIs are always required, but the request
//! messages represent them as plain strings that may be left empty. The
//! transports always write:
//!
//! ```norust
//! let path = format!("/jobs/{}", required(&req.job_id, "job_id")?);
//! ```
//!
//! so a request with a missing id fails before anything is sent.

use gax::error::Error;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// The characters that terminate or delimit a URL path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Validates a required path parameter and escapes it for use in a URL path.
pub fn required(value: &str, name: &str) -> gax::Result<String> {
    if value.is_empty() {
        return Err(Error::binding(format!(
            "missing required parameter {name}"
        )));
    }
    Ok(utf8_percent_encode(value, SEGMENT).to_string())
}
