// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole libraries: several strings rendered, mapped and serialized.

use eagle_lbr::{LibraryFile, Primitive, Rectangle};
use lbr_text::{Error, PlacementConfig, Rasterizer, RenderOptions, Slant, TextLibrary};
use roxmltree::{Document, Node};

use crate::util::{
    bundled_options, bundled_rasterizer, serialize, AsciiRasterizer, FONT_FAMILY,
};

fn build(texts: &[&str]) -> LibraryFile {
    let mut library = TextLibrary::new(
        AsciiRasterizer::default(),
        PlacementConfig::default(),
        RenderOptions::default(),
    )
    .unwrap();
    for text in texts {
        library.add_text(text).unwrap();
    }
    library.finish()
}

fn elements<'a, 'input>(node: Node<'a, 'input>, name: &'a str) -> Vec<Node<'a, 'input>> {
    node.descendants()
        .filter(|child| child.has_tag_name(name))
        .collect()
}

fn rectangles(library: &LibraryFile, package: &str) -> Vec<Rectangle> {
    library
        .package(package)
        .unwrap()
        .primitives()
        .iter()
        .map(|primitive| match primitive {
            Primitive::Rectangle(rect) => *rect,
            _ => panic!("unexpected primitive {primitive:?}"),
        })
        .collect()
}

#[test]
fn library_two_strings_make_two_packages_in_order() {
    let library = build(&["TO", "LIT"]);
    let names: Vec<_> = library.packages().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["TO", "LIT"]);

    // One rectangle per ink run of each string's own bitmap.
    let to = rectangles(&library, "TO");
    let lit = rectangles(&library, "LIT");
    assert_eq!(to.len(), 2 + 3 + 3 + 2);
    assert_eq!(lit.len(), 3 + 3 + 3 + 3);

    let xml = serialize(&library);
    let to_at = xml.find("<package name=\"TO\">").unwrap();
    let lit_at = xml.find("<package name=\"LIT\">").unwrap();
    assert!(to_at < lit_at, "packages must be serialized in input order");
}

#[test]
fn library_document_structure() {
    let xml = serialize(&build(&["IT", "L-T"]));
    assert!(xml.starts_with("<?xml version='1.0' encoding='utf-8'?>\n"));
    let doc = Document::parse(&xml).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "eagle");
    assert_eq!(root.attribute("version"), Some("6.5.0"));

    let settings = elements(root, "setting");
    assert_eq!(settings[0].attribute("alwaysvectorfont"), Some("no"));
    assert_eq!(settings[1].attribute("verticaltext"), Some("up"));

    let layers = elements(root, "layer");
    assert_eq!(layers.len(), 59);
    let tplace = layers
        .iter()
        .find(|layer| layer.attribute("number") == Some("21"))
        .unwrap();
    assert_eq!(tplace.attribute("name"), Some("tPlace"));

    let packages = elements(root, "package");
    let devicesets = elements(root, "deviceset");
    assert_eq!(packages.len(), 2);
    assert_eq!(devicesets.len(), packages.len());
    for (package, deviceset) in packages.iter().zip(&devicesets) {
        assert_eq!(package.attribute("name"), deviceset.attribute("name"));
        let devices = elements(*deviceset, "device");
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].attribute("name"), Some(""));
        assert_eq!(devices[0].attribute("package"), package.attribute("name"));
        assert_eq!(elements(devices[0], "technology").len(), 1);
        assert_eq!(elements(*deviceset, "gates").len(), 1);
    }
    assert_eq!(packages[1].attribute("name"), Some("L-T"));
}

#[test]
fn library_coordinates_have_six_decimals() {
    let xml = serialize(&build(&["TOTL"]));
    let doc = Document::parse(&xml).unwrap();
    let rects = elements(doc.root_element(), "rectangle");
    assert!(!rects.is_empty());
    for rect in rects {
        assert_eq!(rect.attribute("layer"), Some("21"));
        for name in ["x1", "y1", "x2", "y2"] {
            let value = rect.attribute(name).unwrap();
            let (_, decimals) = value.split_once('.').unwrap();
            assert_eq!(decimals.len(), 6, "{name}={value}");
            assert_ne!(value, "-0.000000");
        }
    }
}

#[test]
fn library_blank_text_gives_an_empty_package() {
    let library = build(&["  "]);
    assert!(library.package("__").unwrap().is_empty());
    let xml = serialize(&library);
    assert!(xml.contains("<package name=\"__\" />"));
}

#[test]
fn library_render_options_reach_the_rasterizer() {
    let options = RenderOptions {
        font_face: "monospace".to_owned(),
        size: 0.1,
        bold: true,
        slant: Slant::Oblique,
        antialias: false,
    };
    let placement = PlacementConfig {
        resolution_dpi: 1200,
        ..PlacementConfig::default()
    };
    let mut library =
        TextLibrary::new(AsciiRasterizer::default(), placement, options.clone()).unwrap();
    library.add_text("T").unwrap();
    let calls = &library.rasterizer_mut().calls;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "T");
    assert_eq!(calls[0].1, 1200);
    assert_eq!(calls[0].2, options);
}

#[test]
fn library_failures_abort_the_string() {
    let mut library = TextLibrary::new(
        AsciiRasterizer::default(),
        PlacementConfig::default(),
        RenderOptions::default(),
    )
    .unwrap();
    library.add_text("IT").unwrap();

    let err = library.add_text("I?").unwrap_err();
    assert!(matches!(err, Error::Font { .. }), "{err:?}");
    assert_eq!(library.add_text(""), Err(Error::EmptyText));
    assert!(matches!(library.add_text("IT"), Err(Error::Library(_))));

    // Nothing from the failed strings made it into the document.
    let file = library.finish();
    assert_eq!(file.packages().len(), 1);
    assert_eq!(file.devicesets().len(), 1);
}

#[test]
fn library_rejects_layers_outside_the_table() {
    let placement = PlacementConfig {
        layer: 200,
        ..PlacementConfig::default()
    };
    let err = TextLibrary::new(AsciiRasterizer::default(), placement, RenderOptions::default())
        .unwrap_err();
    assert_eq!(err, Error::UnknownLayer(200));
}

#[test]
fn library_system_blank_text_gives_an_empty_package() {
    let mut library = TextLibrary::new(
        bundled_rasterizer(),
        PlacementConfig::default(),
        bundled_options(),
    )
    .unwrap();
    let entry = library.add_text("  ").unwrap();
    assert_eq!(entry.name, "__");
    assert!(entry.rendered.bitmap.is_empty());
    assert_eq!(entry.rectangles, 0);

    let xml = serialize(&library.finish());
    assert!(xml.contains("<package name=\"__\" />"));
}

#[test]
fn library_system_unknown_font_face_is_unavailable() {
    let options = RenderOptions {
        font_face: "NoSuchFace".to_owned(),
        ..bundled_options()
    };
    let mut rasterizer = bundled_rasterizer();
    assert!(!rasterizer.has_face("NoSuchFace"));
    assert!(rasterizer.has_face(FONT_FAMILY));
    assert_eq!(
        rasterizer.render("IT", 600, &options).map(|_| ()),
        Err(Error::FontUnavailable("NoSuchFace".to_owned()))
    );

    let mut library =
        TextLibrary::new(rasterizer, PlacementConfig::default(), options).unwrap();
    assert_eq!(
        library.add_text("IT").map(|_| ()),
        Err(Error::FontUnavailable("NoSuchFace".to_owned()))
    );
    assert!(library.finish().packages().is_empty());
}

#[test]
fn library_system_generic_sans_renders_text() {
    let mut library = TextLibrary::new(
        bundled_rasterizer(),
        PlacementConfig::default(),
        RenderOptions::default(),
    )
    .unwrap();
    let entry = library.add_text("Hi").unwrap();
    assert_eq!(entry.name, "HI");
    assert!(entry.rectangles > 0);
    let package = library.library().package("HI").unwrap();
    assert_eq!(package.primitives().len(), entry.rectangles);
}
