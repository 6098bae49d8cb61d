// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io::{self, Write};

use crate::xml::Element;
use crate::{Error, ErrorKind, LayerTable, Primitive, Rectangle, EAGLE_VERSION};

/// A named footprint: an ordered list of primitives.
#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    name: String,
    primitives: Vec<Primitive>,
}

impl Package {
    /// Creates an empty package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primitives: Vec::new(),
        }
    }

    /// The package name, which devices use to reference it.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a rectangle with corners in millimeters.
    pub fn add_rectangle(&mut self, layer: u16, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.push(Rectangle::new(layer, x1, y1, x2, y2));
    }

    /// Appends any primitive.
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// The primitives, in insertion order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Whether the package has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    fn to_element(&self) -> Element {
        let mut package = Element::new("package").attr("name", self.name.clone());
        for primitive in &self.primitives {
            package.push(primitive.to_element());
        }
        package
    }
}

impl Extend<Rectangle> for Package {
    fn extend<T: IntoIterator<Item = Rectangle>>(&mut self, iter: T) {
        self.primitives
            .extend(iter.into_iter().map(Primitive::Rectangle));
    }
}

/// One variant of a deviceset, bound to a package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Device {
    name: String,
    package: String,
}

impl Device {
    /// The variant name. Single-variant devicesets use the empty name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the package this device is built from.
    pub fn package(&self) -> &str {
        &self.package
    }

    fn to_element(&self) -> Element {
        // Every device carries the default technology, which has the empty name.
        Element::new("device")
            .attr("name", self.name.clone())
            .attr("package", self.package.clone())
            .child(Element::new("technologies").child(Element::new("technology").attr("name", "")))
    }
}

/// A logical part mapping onto one or more packages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceSet {
    name: String,
    devices: Vec<Device>,
}

impl DeviceSet {
    /// Creates a deviceset with no gates and no devices.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            devices: Vec::new(),
        }
    }

    /// The deviceset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a device built from the package named `package`.
    pub fn add_device(&mut self, name: impl Into<String>, package: impl Into<String>) {
        self.devices.push(Device {
            name: name.into(),
            package: package.into(),
        });
    }

    /// The devices, in insertion order.
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    fn to_element(&self) -> Element {
        let mut devices = Element::new("devices");
        for device in &self.devices {
            devices.push(device.to_element());
        }
        Element::new("deviceset")
            .attr("name", self.name.clone())
            .child(Element::new("gates"))
            .child(devices)
    }
}

/// An Eagle library document.
///
/// Holds the drawing settings, the layer table and the library contents. Packages and devicesets
/// are kept in insertion order, which is also the order they are written in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LibraryFile {
    layers: LayerTable,
    packages: Vec<Package>,
    devicesets: Vec<DeviceSet>,
}

impl LibraryFile {
    /// Creates an empty library with the standard layer table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The layer table primitives are checked against.
    pub fn layers(&self) -> &LayerTable {
        &self.layers
    }

    /// The packages added so far.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// The devicesets added so far.
    pub fn devicesets(&self) -> &[DeviceSet] {
        &self.devicesets
    }

    /// Looks up a package by name.
    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|package| package.name == name)
    }

    /// Adds a finished package.
    ///
    /// Fails if the name is taken or a primitive uses a layer missing from the layer table.
    pub fn add_package(&mut self, package: Package) -> Result<(), Error> {
        if self.package(&package.name).is_some() {
            return Err(Error::new(ErrorKind::DuplicatePackage, &package.name));
        }
        if let Some(primitive) = package
            .primitives
            .iter()
            .find(|primitive| !self.layers.contains(primitive.layer()))
        {
            return Err(Error::unknown_layer(&package.name, primitive.layer()));
        }
        log::debug!(
            "adding package {:?} with {} primitives",
            package.name,
            package.primitives.len()
        );
        self.packages.push(package);
        Ok(())
    }

    /// Adds a finished deviceset.
    ///
    /// Fails if the name is taken or a device references a package that has not been added.
    pub fn add_deviceset(&mut self, deviceset: DeviceSet) -> Result<(), Error> {
        if self.devicesets.iter().any(|set| set.name == deviceset.name) {
            return Err(Error::new(ErrorKind::DuplicateDeviceSet, &deviceset.name));
        }
        if deviceset
            .devices
            .iter()
            .any(|device| self.package(&device.package).is_none())
        {
            return Err(Error::new(ErrorKind::UnknownPackage, &deviceset.name));
        }
        log::debug!(
            "adding deviceset {:?} with {} devices",
            deviceset.name,
            deviceset.devices.len()
        );
        self.devicesets.push(deviceset);
        Ok(())
    }

    /// Serializes the document as UTF-8 XML.
    ///
    /// The output is pretty printed with one element per line, since Eagle's reader does not cope
    /// with very long lines.
    pub fn write<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"<?xml version='1.0' encoding='utf-8'?>\n")?;
        self.to_element().write_to(&mut out, 0)?;
        out.flush()
    }

    fn to_element(&self) -> Element {
        let settings = Element::new("settings")
            .child(Element::new("setting").attr("alwaysvectorfont", "no"))
            .child(Element::new("setting").attr("verticaltext", "up"));
        let grid = Element::new("grid")
            .attr("distance", "0.1")
            .attr("unitdist", "inch")
            .attr("unit", "inch")
            .attr("style", "lines")
            .attr("multiple", "1")
            .attr("display", "no")
            .attr("altdistance", "0.01")
            .attr("altunitdist", "inch")
            .attr("altunit", "inch");

        let mut packages = Element::new("packages");
        for package in &self.packages {
            packages.push(package.to_element());
        }
        let mut devicesets = Element::new("devicesets");
        for deviceset in &self.devicesets {
            devicesets.push(deviceset.to_element());
        }
        let library = Element::new("library")
            .child(packages)
            .child(Element::new("symbols"))
            .child(devicesets);

        Element::new("eagle").attr("version", EAGLE_VERSION).child(
            Element::new("drawing")
                .child(settings)
                .child(grid)
                .child(self.layers.to_element())
                .child(library),
        )
    }
}
