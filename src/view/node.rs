//! Declarative view tree
//!
//! Render functions build [`Node`] trees; [`Node::render_html`] turns them into
//! markup. All text and attribute values are escaped on output, and click
//! bindings are serialized as a JSON `data-on-click` attribute.

use std::fmt::Write as _;
use super::action::{Action, ChangeAction};

const VOID_TAGS: [&str; 4] = ["input", "br", "hr", "img"];

/// A node of the view tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Fragment(Vec<Node>),
}

/// An element with classes, attributes, children and optional bindings
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub on_click: Option<Action>,
    pub on_change: Option<ChangeAction>,
    pub disabled: bool,
    pub hidden: bool,
}

/// Start building an element
pub fn el(tag: &str) -> Element {
    Element::new(tag)
}

/// Shorthand for `el(tag).class(class).text(text)`
pub fn text_el(tag: &str, class: &str, text: impl Into<String>) -> Element {
    el(tag).class(class).text(text)
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            on_click: None,
            on_change: None,
            disabled: false,
            hidden: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add one or more space separated classes
    pub fn class(mut self, class: &str) -> Self {
        self.classes.extend(class.split_whitespace().map(str::to_string));
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a child only when present
    pub fn child_opt(mut self, child: Option<impl Into<Node>>) -> Self {
        if let Some(child) = child {
            self.children.push(child.into());
        }
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    pub fn on_change(mut self, change: ChangeAction) -> Self {
        self.on_change = Some(change);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Action a click would trigger; disabled elements trigger nothing
    pub fn click(&self) -> Option<&Action> {
        if self.disabled {
            None
        } else {
            self.on_click.as_ref()
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.click().is_some()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn fragment(nodes: Vec<Node>) -> Self {
        Node::Fragment(nodes)
    }

    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Render the tree to escaped HTML
    pub fn render_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape(text)),
            Node::Fragment(nodes) => nodes.iter().for_each(|n| n.write_html(out)),
            Node::Element(element) => element.write_html(out),
        }
    }

    /// Visit every element depth-first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        match self {
            Node::Text(_) => {}
            Node::Fragment(nodes) => nodes.iter().for_each(|n| n.walk(visit)),
            Node::Element(element) => {
                visit(element);
                element.children.iter().for_each(|n| n.walk(visit));
            }
        }
    }

    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut |element| {
            if predicate(element) {
                found.push(element);
            }
        });
        found
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|e| e.has_class(class))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find_all(|e| e.id.as_deref() == Some(id)).into_iter().next()
    }

    /// Concatenated text of the subtree
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Fragment(nodes) => nodes.iter().map(Node::text_content).collect(),
            Node::Element(element) => element.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Every action reachable by clicking somewhere in the subtree
    pub fn actions(&self) -> Vec<&Action> {
        let mut actions = Vec::new();
        self.walk(&mut |element| {
            if let Some(action) = element.click() {
                actions.push(action);
            }
        });
        actions
    }
}

impl Element {
    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if let Some(id) = &self.id {
            let _ = write!(out, " id=\"{}\"", escape(id));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if self.disabled {
            out.push_str(" disabled");
        }
        if self.hidden {
            out.push_str(" hidden");
        }
        if let Some(action) = self.click() {
            if let Ok(json) = serde_json::to_string(action) {
                let _ = write!(out, " data-on-click=\"{}\"", escape(&json));
            }
        }
        if let Some(change) = &self.on_change {
            if let Ok(json) = serde_json::to_string(change) {
                let _ = write!(out, " data-on-change=\"{}\"", escape(&json));
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escape text for HTML content and double-quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let node: Node = el("div")
            .class("group-card")
            .text("<script>alert('x')</script> & co")
            .into();
        assert_eq!(
            node.render_html(),
            "<div class=\"group-card\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; co</div>"
        );
    }

    #[test]
    fn test_action_payload_is_escaped_json() {
        let node: Node = el("button")
            .on_click(Action::OpenTelegram { username: "a\"b".to_string() })
            .text("Telegram")
            .into();
        let html = node.render_html();
        assert!(html.contains("data-on-click=\"{&quot;action&quot;:&quot;open_telegram&quot;"));
        assert!(!html.contains("onclick"));
    }

    #[test]
    fn test_disabled_element_has_no_action() {
        let node: Node = el("button").on_click(Action::SaveAttendance).disabled(true).into();
        let element = node.as_element().unwrap();
        assert!(!element.is_clickable());
        assert!(node.actions().is_empty());
        assert_eq!(node.render_html(), "<button disabled></button>");
    }

    #[test]
    fn test_void_elements_and_queries() {
        let node: Node = el("div")
            .child(el("input").id("authCode").attr("maxlength", "6"))
            .child(text_el("span", "price", "1 000 ₽"))
            .into();
        assert_eq!(
            node.render_html(),
            "<div><input id=\"authCode\" maxlength=\"6\"><span class=\"price\">1 000 ₽</span></div>"
        );
        assert_eq!(node.find_by_id("authCode").unwrap().get_attr("maxlength"), Some("6"));
        assert_eq!(node.find_by_class("price").len(), 1);
        assert_eq!(node.text_content(), "1 000 ₽");
    }
}
