// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::xml::Element;

/// One entry of an Eagle layer table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layer {
    /// Layer number, as referenced by primitives.
    pub number: u16,
    /// Layer name, e.g. `tPlace`.
    pub name: &'static str,
    /// Index into Eagle's color palette.
    pub color: u8,
    /// Fill pattern index.
    pub fill: u8,
    /// Whether the layer is displayed.
    pub visible: bool,
    /// Whether the layer is usable in this drawing.
    pub active: bool,
}

impl Layer {
    const fn new(
        number: u16,
        name: &'static str,
        color: u8,
        fill: u8,
        visible: bool,
        active: bool,
    ) -> Self {
        Self {
            number,
            name,
            color,
            fill,
            visible,
            active,
        }
    }

    pub(crate) fn to_element(self) -> Element {
        Element::new("layer")
            .attr("number", self.number.to_string())
            .attr("name", self.name)
            .attr("color", self.color.to_string())
            .attr("fill", self.fill.to_string())
            .attr("visible", yes_no(self.visible))
            .attr("active", yes_no(self.active))
    }
}

/// The layer table written into a drawing.
///
/// Primitives may only reference layers listed here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerTable {
    layers: &'static [Layer],
}

impl LayerTable {
    /// Looks up a layer by number.
    pub fn get(&self, number: u16) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.number == number)
    }

    /// Looks up a layer by name. Names are case sensitive (`tPlace` and `bPlace` differ).
    pub fn by_name(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// Whether `number` is a layer of this table.
    pub fn contains(&self, number: u16) -> bool {
        self.get(number).is_some()
    }

    /// All layers, in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = &Layer> + '_ {
        self.layers.iter()
    }

    pub(crate) fn to_element(&self) -> Element {
        let mut layers = Element::new("layers");
        for layer in self.layers {
            layers.push(layer.to_element());
        }
        layers
    }
}

impl Default for LayerTable {
    /// The standard Eagle layer set.
    fn default() -> Self {
        Self {
            layers: STANDARD_LAYERS,
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[rustfmt::skip]
static STANDARD_LAYERS: &[Layer] = &[
    Layer::new(1,  "Top",       4,  1,  true,  true),
    Layer::new(2,  "Route2",    1,  3,  false, true),
    Layer::new(3,  "Route3",    4,  3,  false, true),
    Layer::new(4,  "Route4",    1,  4,  false, true),
    Layer::new(5,  "Route5",    4,  4,  false, true),
    Layer::new(6,  "Route6",    1,  8,  false, true),
    Layer::new(7,  "Route7",    4,  8,  false, true),
    Layer::new(8,  "Route8",    1,  2,  false, true),
    Layer::new(9,  "Route9",    4,  2,  false, true),
    Layer::new(10, "Route10",   1,  7,  false, true),
    Layer::new(11, "Route11",   4,  7,  false, true),
    Layer::new(12, "Route12",   1,  5,  false, true),
    Layer::new(13, "Route13",   4,  5,  false, true),
    Layer::new(14, "Route14",   1,  6,  false, true),
    Layer::new(15, "Route15",   4,  6,  false, true),
    Layer::new(16, "Bottom",    1,  1,  true,  true),
    Layer::new(17, "Pads",      2,  1,  true,  true),
    Layer::new(18, "Vias",      2,  1,  true,  true),
    Layer::new(19, "Unrouted",  6,  1,  true,  true),
    Layer::new(20, "Dimension", 15, 1,  true,  true),
    Layer::new(21, "tPlace",    7,  1,  true,  true),
    Layer::new(22, "bPlace",    7,  1,  true,  true),
    Layer::new(23, "tOrigins",  15, 1,  true,  true),
    Layer::new(24, "bOrigins",  15, 1,  true,  true),
    Layer::new(25, "tNames",    7,  1,  true,  true),
    Layer::new(26, "bNames",    7,  1,  true,  true),
    Layer::new(27, "tValues",   7,  1,  true,  true),
    Layer::new(28, "bValues",   7,  1,  true,  true),
    Layer::new(29, "tStop",     7,  3,  false, true),
    Layer::new(30, "bStop",     7,  6,  false, true),
    Layer::new(31, "tCream",    7,  4,  false, true),
    Layer::new(32, "bCream",    7,  5,  false, true),
    Layer::new(33, "tFinish",   6,  3,  false, true),
    Layer::new(34, "bFinish",   6,  6,  false, true),
    Layer::new(35, "tGlue",     7,  4,  false, true),
    Layer::new(36, "bGlue",     7,  5,  false, true),
    Layer::new(37, "tTest",     7,  1,  false, true),
    Layer::new(38, "bTest",     7,  1,  false, true),
    Layer::new(39, "tKeepout",  4,  11, true,  true),
    Layer::new(40, "bKeepout",  1,  11, true,  true),
    Layer::new(41, "tRestrict", 4,  10, true,  true),
    Layer::new(42, "bRestrict", 1,  10, true,  true),
    Layer::new(43, "vRestrict", 2,  10, true,  true),
    Layer::new(44, "Drills",    7,  1,  false, true),
    Layer::new(45, "Holes",     7,  1,  false, true),
    Layer::new(46, "Milling",   3,  1,  false, true),
    Layer::new(47, "Measures",  7,  1,  false, true),
    Layer::new(48, "Document",  7,  1,  true,  true),
    Layer::new(49, "Reference", 7,  1,  true,  true),
    Layer::new(51, "tDocu",     7,  1,  true,  true),
    Layer::new(52, "bDocu",     7,  1,  true,  true),
    Layer::new(91, "Nets",      2,  1,  true,  true),
    Layer::new(92, "Busses",    1,  1,  true,  true),
    Layer::new(93, "Pins",      2,  1,  false, true),
    Layer::new(94, "Symbols",   4,  1,  true,  true),
    Layer::new(95, "Names",     7,  1,  true,  true),
    Layer::new(96, "Values",    7,  1,  true,  true),
    Layer::new(97, "Info",      7,  1,  true,  true),
    Layer::new(98, "Guide",     6,  1,  true,  true),
];

#[cfg(test)]
mod tests {
    use super::LayerTable;

    #[test]
    fn standard_table_is_sorted_and_unique() {
        let table = LayerTable::default();
        let numbers: Vec<_> = table.iter().map(|layer| layer.number).collect();
        assert!(
            numbers.windows(2).all(|pair| pair[0] < pair[1]),
            "layer numbers must be strictly ascending"
        );
        assert_eq!(numbers.len(), 59);
    }

    #[test]
    fn lookup_by_number_and_name() {
        let table = LayerTable::default();
        assert_eq!(table.get(21).map(|layer| layer.name), Some("tPlace"));
        assert_eq!(table.by_name("bDocu").map(|layer| layer.number), Some(52));
        assert!(table.by_name("tplace").is_none());
        assert!(!table.contains(50));
        assert!(!table.contains(0));
    }
}
