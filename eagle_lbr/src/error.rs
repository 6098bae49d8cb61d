// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when an addition would make the library inconsistent.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the name of the offending package or deviceset and,
/// for layer errors, the layer number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    name: String,
    layer: Option<u16>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The package or deviceset name the error refers to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unknown layer, for [`ErrorKind::UnknownLayer`].
    pub fn layer(&self) -> Option<u16> {
        self.layer
    }

    pub(crate) fn new(kind: ErrorKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_owned(),
            layer: None,
        }
    }

    pub(crate) fn unknown_layer(package: &str, layer: u16) -> Self {
        Self {
            kind: ErrorKind::UnknownLayer,
            name: package.to_owned(),
            layer: Some(layer),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::DuplicatePackage => {
                write!(f, "library already has a package named {:?}", self.name)
            }
            ErrorKind::DuplicateDeviceSet => {
                write!(f, "library already has a deviceset named {:?}", self.name)
            }
            ErrorKind::UnknownLayer => match self.layer {
                Some(layer) => write!(
                    f,
                    "package {:?} draws on layer {layer}, which is not in the layer table",
                    self.name
                ),
                None => write!(f, "package {:?} draws on an unknown layer", self.name),
            },
            ErrorKind::UnknownPackage => write!(
                f,
                "deviceset {:?} references a package that is not in the library",
                self.name
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A package with the same name was already added.
    DuplicatePackage,

    /// A deviceset with the same name was already added.
    DuplicateDeviceSet,

    /// A primitive references a layer missing from the layer table.
    UnknownLayer,

    /// A device references a package that was not added first.
    UnknownPackage,
}
