// Copyright 2026 the Lbr Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal owned XML element tree and pretty printer.

use std::borrow::Cow;
use std::io::{self, Write};

/// An XML element that owns its attributes and children.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Element {
    name: &'static str,
    attributes: Vec<(&'static str, Cow<'static, str>)>,
    children: Vec<Element>,
}

impl Element {
    pub(crate) fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute. Attributes are written in insertion order.
    pub(crate) fn attr(mut self, name: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    pub(crate) fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn push(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Writes the element and its subtree, one element per line, indenting each level by two
    /// spaces.
    pub(crate) fn write_to<W: Write + ?Sized>(&self, out: &mut W, level: usize) -> io::Result<()> {
        write_indent(out, level)?;
        write!(out, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(out, " {name}=\"")?;
            write_escaped(out, value)?;
            out.write_all(b"\"")?;
        }
        if self.children.is_empty() {
            return out.write_all(b" />\n");
        }
        out.write_all(b">\n")?;
        for child in &self.children {
            child.write_to(out, level + 1)?;
        }
        write_indent(out, level)?;
        writeln!(out, "</{}>", self.name)
    }
}

fn write_indent<W: Write + ?Sized>(out: &mut W, level: usize) -> io::Result<()> {
    for _ in 0..level {
        out.write_all(b"  ")?;
    }
    Ok(())
}

fn write_escaped<W: Write + ?Sized>(out: &mut W, value: &str) -> io::Result<()> {
    let mut rest = value;
    while let Some(pos) = rest.find(['&', '<', '>', '"', '\n', '\r', '\t']) {
        out.write_all(rest[..pos].as_bytes())?;
        let escaped: &[u8] = match rest.as_bytes()[pos] {
            b'&' => b"&amp;",
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            b'"' => b"&quot;",
            b'\n' => b"&#10;",
            b'\r' => b"&#13;",
            _ => b"&#09;",
        };
        out.write_all(escaped)?;
        rest = &rest[pos + 1..];
    }
    out.write_all(rest.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::Element;

    fn render(element: &Element) -> String {
        let mut out = Vec::new();
        element.write_to(&mut out, 0).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn nested_elements_are_indented() {
        let tree = Element::new("a")
            .attr("x", "1")
            .child(Element::new("b").child(Element::new("c").attr("y", "2")))
            .child(Element::new("d"));
        assert_eq!(
            render(&tree),
            "<a x=\"1\">\n  <b>\n    <c y=\"2\" />\n  </b>\n  <d />\n</a>\n"
        );
    }

    #[test]
    fn attribute_values_are_escaped() {
        let tree = Element::new("package").attr("name", "A&B <\"C\">\n");
        assert_eq!(
            render(&tree),
            "<package name=\"A&amp;B &lt;&quot;C&quot;&gt;&#10;\" />\n"
        );
    }
}
