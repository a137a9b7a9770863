pub mod binder;
pub mod icon;

use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::debug;

use icon::Icon;

/// A child of an element in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Icon { icon: Icon, class: &'static str },
}

/// Structured description of one DOM element. Templates build these as plain
/// values; nothing is attached anywhere until a `View` mounts them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Element {
            tag,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add whitespace-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    /// Append a fragment only when it is present.
    pub fn maybe(self, child: Option<Element>) -> Self {
        match child {
            Some(c) => self.child(c),
            None => self,
        }
    }

    pub fn icon(mut self, icon: Icon, class: &'static str) -> Self {
        self.children.push(Node::Icon { icon, class });
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
                Node::Icon { .. } => {}
            }
        }
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| match c {
            Node::Element(e) => e.find(id),
            _ => None,
        })
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| match c {
            Node::Element(e) => e.find_mut(id),
            _ => None,
        })
    }

    /// Direct element children, skipping text and icons.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(id) = &self.id {
            push_attr(out, "id", id);
        }
        if !self.classes.is_empty() {
            push_attr(out, "class", &self.classes.join(" "));
        }
        for (name, value) in &self.attrs {
            push_attr(out, name, value);
        }
        out.push('>');
        for child in &self.children {
            match child {
                Node::Element(e) => e.write_html(out),
                Node::Text(t) => out.push_str(&encode_text(t)),
                Node::Icon { icon, class } => write_icon(out, *icon, class),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}

fn write_icon(out: &mut String, icon: Icon, class: &str) {
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24""#);
    if icon.filled() {
        out.push_str(r#" fill="currentColor""#);
    } else {
        out.push_str(r#" fill="none" stroke-width="1.5" stroke="currentColor""#);
    }
    push_attr(out, "class", class);
    push_attr(out, "data-icon", icon.key());
    out.push('>');
    for d in icon.paths() {
        out.push_str(r#"<path stroke-linecap="round" stroke-linejoin="round""#);
        push_attr(out, "d", d);
        out.push_str("></path>");
    }
    out.push_str("</svg>");
}

/// A named container that rendered nodes are attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    pub id: String,
    pub children: Vec<Element>,
}

/// The page's set of mount points and whatever is currently attached to them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct View {
    mounts: Vec<MountPoint>,
}

impl View {
    pub fn new(mount_points: &[&str]) -> Self {
        View {
            mounts: mount_points
                .iter()
                .map(|id| MountPoint {
                    id: id.to_string(),
                    children: Vec::new(),
                })
                .collect(),
        }
    }

    /// Replace every child of `container` with `nodes`. A missing container
    /// is skipped; returns whether anything was mounted.
    pub fn mount(&mut self, container: &str, nodes: Vec<Element>) -> bool {
        match self.mounts.iter_mut().find(|m| m.id == container) {
            Some(mount) => {
                debug!(container, nodes = nodes.len(), "mounting");
                mount.children = nodes;
                true
            }
            None => {
                debug!(container, "mount point not present, skipping");
                false
            }
        }
    }

    pub fn children(&self, container: &str) -> Option<&[Element]> {
        self.mounts
            .iter()
            .find(|m| m.id == container)
            .map(|m| m.children.as_slice())
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.mounts
            .iter()
            .flat_map(|m| m.children.iter())
            .find_map(|e| e.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.mounts
            .iter_mut()
            .flat_map(|m| m.children.iter_mut())
            .find_map(|e| e.find_mut(id))
    }

    /// Every mount point as a `<div id=…>` wrapper, one per line.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for mount in &self.mounts {
            out.push_str("<div");
            push_attr(&mut out, "id", &mount.id);
            out.push('>');
            for child in &mount.children {
                child.write_html(&mut out);
            }
            out.push_str("</div>\n");
        }
        out
    }
}
