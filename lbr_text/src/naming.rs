// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Derives a package name from the text it renders.
///
/// The text is uppercased and every space becomes an underscore. Other characters are kept as
/// they are, so distinct strings can collide once uppercased; the library rejects the second one.
pub fn package_name(text: &str) -> String {
    text.to_uppercase().replace(' ', "_")
}
