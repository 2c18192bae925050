//! Decorator chains described by name.
//!
//! Chains built in code cannot loop: every [`Wrapper`] owns its inner
//! capability, so nothing can be wrapped around itself. A chain described in
//! TOML refers to its nodes by name and can, so [`ChainSpec::assemble`] walks
//! every node of the description, reachable from the root or not, and
//! rejects it before constructing anything.
//!
//! ```toml
//! root = "decorated"
//!
//! [[node]]
//! name = "base"
//! kind = "component"
//!
//! [[node]]
//! name = "decorated"
//! kind = "decorated"
//! inner = "base"
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::composition::{Capability, Layer, Wrapper};
use crate::error::{PatternError, Result};
use crate::structural::adapter::Adapter;
use crate::structural::decorator::{
    BracketLayer, ConcreteComponent, DecoratedLayer, TextComponent, UppercaseLayer,
};

pub type TextCapability = Box<dyn Capability<(), String>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Terminal: `text` if given, otherwise the stock concrete component.
    Component,
    /// Terminal: the adapted legacy component.
    Adapter,
    Decorated,
    Bracket,
    Uppercase,
}

impl NodeKind {
    pub fn is_terminal(self) -> bool {
        matches!(self, NodeKind::Component | NodeKind::Adapter)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    pub name: String,
    pub kind: NodeKind,
    pub inner: Option<String>,
    pub text: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainSpec {
    pub root: String,
    #[serde(rename = "node", default)]
    pub nodes: Vec<NodeSpec>,
}

impl ChainSpec {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading chain description");
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Node names from the root down to the terminal behaviour.
    ///
    /// Nodes the root never reaches are checked too: a dangling `inner` or a
    /// cycle anywhere in the description is an error.
    pub fn resolve(&self) -> Result<Vec<&NodeSpec>> {
        let mut by_name: HashMap<&str, &NodeSpec> = HashMap::new();
        for node in &self.nodes {
            check_shape(node)?;
            if by_name.insert(node.name.as_str(), node).is_some() {
                return Err(PatternError::DuplicateNode(node.name.clone()));
            }
        }

        let root = by_name
            .get(self.root.as_str())
            .copied()
            .ok_or_else(|| PatternError::UnknownNode(self.root.clone()))?;
        let path = walk(&by_name, root, &HashSet::new())?;

        let mut settled: HashSet<&str> = path.iter().map(|node| node.name.as_str()).collect();
        for node in &self.nodes {
            let trail = walk(&by_name, node, &settled)?;
            settled.extend(trail.iter().map(|node| node.name.as_str()));
        }
        Ok(path)
    }

    /// Validate the whole description, then build it innermost first.
    pub fn assemble(&self) -> Result<TextCapability> {
        let path = self.resolve()?;
        let mut layers = path.iter().rev();

        let mut chain: TextCapability = match layers.next() {
            Some(terminal) => terminal_for(terminal)?,
            None => return Err(PatternError::UnknownNode(self.root.clone())),
        };
        for node in layers {
            chain = Box::new(Wrapper::new(layer_for(node)?, chain));
        }

        info!(root = %self.root, depth = chain.depth(), "chain assembled");
        Ok(chain)
    }
}

/// Follows `inner` links from `start` until a terminal or an already
/// settled node. Each node has at most one inner, so meeting a name twice
/// on the same walk is a cycle.
fn walk<'a>(
    by_name: &HashMap<&'a str, &'a NodeSpec>,
    start: &'a NodeSpec,
    settled: &HashSet<&'a str>,
) -> Result<Vec<&'a NodeSpec>> {
    let mut trail: Vec<&'a NodeSpec> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut current = start;
    loop {
        if settled.contains(current.name.as_str()) {
            return Ok(trail);
        }
        if !seen.insert(current.name.as_str()) {
            let mut cycle: Vec<String> = trail.iter().map(|node| node.name.clone()).collect();
            cycle.push(current.name.clone());
            return Err(PatternError::CyclicWrapper { path: cycle });
        }
        trail.push(current);
        match &current.inner {
            Some(inner) => {
                current = by_name
                    .get(inner.as_str())
                    .copied()
                    .ok_or_else(|| PatternError::UnknownNode(inner.clone()))?;
            }
            None => return Ok(trail),
        }
    }
}

fn check_shape(node: &NodeSpec) -> Result<()> {
    match (node.kind.is_terminal(), &node.inner) {
        (true, Some(_)) => {
            return Err(PatternError::invalid_node(
                &node.name,
                "a terminal behaviour cannot wrap another node",
            ))
        }
        (false, None) => {
            return Err(PatternError::invalid_node(
                &node.name,
                "a layer needs an inner node",
            ))
        }
        _ => {}
    }
    if node.text.is_some() && node.kind != NodeKind::Component {
        return Err(PatternError::invalid_node(
            &node.name,
            "only a component takes `text`",
        ));
    }
    if (node.prefix.is_some() || node.suffix.is_some()) && node.kind != NodeKind::Bracket {
        return Err(PatternError::invalid_node(
            &node.name,
            "only a bracket takes `prefix` and `suffix`",
        ));
    }
    Ok(())
}

fn terminal_for(node: &NodeSpec) -> Result<TextCapability> {
    match node.kind {
        NodeKind::Component => {
            let component: TextCapability = match &node.text {
                Some(text) => Box::new(TextComponent::new(text.clone())),
                None => Box::new(ConcreteComponent),
            };
            Ok(component)
        }
        NodeKind::Adapter => Ok(Box::new(Adapter::default())),
        NodeKind::Decorated | NodeKind::Bracket | NodeKind::Uppercase => Err(
            PatternError::invalid_node(&node.name, "a layer cannot end a chain"),
        ),
    }
}

fn layer_for(node: &NodeSpec) -> Result<Box<dyn Layer<(), String>>> {
    match node.kind {
        NodeKind::Decorated => Ok(Box::new(DecoratedLayer)),
        NodeKind::Bracket => Ok(Box::new(BracketLayer::new(
            node.prefix.clone().unwrap_or_default(),
            node.suffix.clone().unwrap_or_default(),
        ))),
        NodeKind::Uppercase => Ok(Box::new(UppercaseLayer)),
        NodeKind::Component | NodeKind::Adapter => Err(PatternError::invalid_node(
            &node.name,
            "a terminal behaviour cannot wrap another node",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWICE: &str = r#"
        root = "outer"

        [[node]]
        name = "base"
        kind = "component"

        [[node]]
        name = "inner"
        kind = "decorated"
        inner = "base"

        [[node]]
        name = "outer"
        kind = "decorated"
        inner = "inner"
    "#;

    #[test]
    fn test_assemble_decorated_twice() {
        let chain = ChainSpec::from_toml_str(TWICE).unwrap().assemble().unwrap();
        assert_eq!(
            chain.perform(()).unwrap(),
            "Decorated(Decorated(Concrete Component))"
        );
        assert_eq!(chain.depth(), 2);
    }

    #[test]
    fn test_resolve_order_is_root_first() {
        let spec = ChainSpec::from_toml_str(TWICE).unwrap();
        let names: Vec<&str> = spec
            .resolve()
            .unwrap()
            .iter()
            .map(|node| node.name.as_str())
            .collect();
        assert_eq!(names, vec!["outer", "inner", "base"]);
    }

    #[test]
    fn test_cycle_rejected() {
        let spec = ChainSpec::from_toml_str(
            r#"
            root = "a"

            [[node]]
            name = "a"
            kind = "decorated"
            inner = "b"

            [[node]]
            name = "b"
            kind = "uppercase"
            inner = "a"
            "#,
        )
        .unwrap();

        match spec.assemble() {
            Err(PatternError::CyclicWrapper { path }) => {
                assert_eq!(path, vec!["a", "b", "a"]);
            }
            Err(other) => panic!("expected a cycle error, got {}", other),
            Ok(_) => panic!("cyclic chain was assembled"),
        }
    }

    #[test]
    fn test_self_wrap_rejected() {
        let spec = ChainSpec::from_toml_str(
            r#"
            root = "loop"

            [[node]]
            name = "loop"
            kind = "decorated"
            inner = "loop"
            "#,
        )
        .unwrap();
        assert!(matches!(
            spec.assemble(),
            Err(PatternError::CyclicWrapper { .. })
        ));
    }

    #[test]
    fn test_unknown_inner() {
        let spec = ChainSpec::from_toml_str(
            r#"
            root = "top"

            [[node]]
            name = "top"
            kind = "decorated"
            inner = "missing"
            "#,
        )
        .unwrap();
        assert!(matches!(
            spec.assemble(),
            Err(PatternError::UnknownNode(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_duplicate_names() {
        let spec = ChainSpec::from_toml_str(
            r#"
            root = "base"

            [[node]]
            name = "base"
            kind = "component"

            [[node]]
            name = "base"
            kind = "adapter"
            "#,
        )
        .unwrap();
        assert!(matches!(
            spec.assemble(),
            Err(PatternError::DuplicateNode(name)) if name == "base"
        ));
    }

    #[test]
    fn test_layer_without_inner() {
        let spec = ChainSpec::from_toml_str(
            r#"
            root = "top"

            [[node]]
            name = "top"
            kind = "bracket"
            "#,
        )
        .unwrap();
        assert!(matches!(
            spec.assemble(),
            Err(PatternError::InvalidNode { .. })
        ));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            ChainSpec::from_toml_str("root = "),
            Err(PatternError::ConfigParse(_))
        ));
        assert!(matches!(
            ChainSpec::from_toml_str("root = \"x\"\n[[node]]\nname = \"x\"\nkind = \"teleport\"\n"),
            Err(PatternError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_adapter_text_and_brackets() {
        let spec = ChainSpec::from_toml_str(
            r#"
            root = "quoted"

            [[node]]
            name = "legacy"
            kind = "adapter"

            [[node]]
            name = "quoted"
            kind = "bracket"
            prefix = "« "
            suffix = " »"
            inner = "legacy"
            "#,
        )
        .unwrap();
        let chain = spec.assemble().unwrap();
        assert_eq!(
            chain.perform(()).unwrap(),
            "« Called SpecificRequest in Adaptee. »"
        );
    }

    #[test]
    fn test_unreachable_dangling_node_rejected() {
        let spec = ChainSpec::from_toml_str(
            r#"
            root = "base"

            [[node]]
            name = "base"
            kind = "component"

            [[node]]
            name = "orphan"
            kind = "decorated"
            inner = "missing"
            "#,
        )
        .unwrap();
        assert!(matches!(
            spec.assemble(),
            Err(PatternError::UnknownNode(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_unreachable_cycle_rejected() {
        let spec = ChainSpec::from_toml_str(
            r#"
            root = "base"

            [[node]]
            name = "base"
            kind = "component"

            [[node]]
            name = "x"
            kind = "decorated"
            inner = "y"

            [[node]]
            name = "y"
            kind = "uppercase"
            inner = "x"
            "#,
        )
        .unwrap();

        match spec.resolve() {
            Err(PatternError::CyclicWrapper { path }) => {
                assert_eq!(path, vec!["x", "y", "x"]);
            }
            Err(other) => panic!("expected a cycle error, got {}", other),
            Ok(_) => panic!("orphan cycle was accepted"),
        }
    }

    #[test]
    fn test_orphan_feeding_root_chain_is_fine() {
        let spec = ChainSpec::from_toml_str(
            r#"
            root = "top"

            [[node]]
            name = "base"
            kind = "component"

            [[node]]
            name = "top"
            kind = "decorated"
            inner = "base"

            [[node]]
            name = "spare"
            kind = "uppercase"
            inner = "top"
            "#,
        )
        .unwrap();
        let chain = spec.assemble().unwrap();
        assert_eq!(chain.perform(()).unwrap(), "Decorated(Concrete Component)");
    }

    #[test]
    fn test_fields_for_other_kinds_rejected() {
        let prefixed_upper = ChainSpec::from_toml_str(
            r#"
            root = "loud"

            [[node]]
            name = "legacy"
            kind = "adapter"

            [[node]]
            name = "loud"
            kind = "uppercase"
            prefix = "[["
            inner = "legacy"
            "#,
        )
        .unwrap();
        assert!(matches!(
            prefixed_upper.assemble(),
            Err(PatternError::InvalidNode { name, .. }) if name == "loud"
        ));

        let texted_adapter = ChainSpec::from_toml_str(
            r#"
            root = "legacy"

            [[node]]
            name = "legacy"
            kind = "adapter"
            text = "ignored"
            "#,
        )
        .unwrap();
        assert!(matches!(
            texted_adapter.assemble(),
            Err(PatternError::InvalidNode { name, .. }) if name == "legacy"
        ));
    }

    #[test]
    fn test_kinds_build_only_in_their_role() {
        let node = |kind| NodeSpec {
            name: "n".to_string(),
            kind,
            inner: None,
            text: None,
            prefix: None,
            suffix: None,
        };

        assert!(layer_for(&node(NodeKind::Decorated)).is_ok());
        assert!(layer_for(&node(NodeKind::Bracket)).is_ok());
        assert!(layer_for(&node(NodeKind::Uppercase)).is_ok());
        assert!(matches!(
            layer_for(&node(NodeKind::Component)),
            Err(PatternError::InvalidNode { .. })
        ));
        assert!(matches!(
            layer_for(&node(NodeKind::Adapter)),
            Err(PatternError::InvalidNode { .. })
        ));

        assert!(terminal_for(&node(NodeKind::Component)).is_ok());
        assert!(terminal_for(&node(NodeKind::Adapter)).is_ok());
        assert!(matches!(
            terminal_for(&node(NodeKind::Decorated)),
            Err(PatternError::InvalidNode { .. })
        ));
    }
}
