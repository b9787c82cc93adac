use crate::profiling::domain::descriptor::DEPENDENCIES;
use crate::profiling::domain::{DependencyDeclaration, Descriptor};
use crate::shared::Result;
use anyhow::Context;
use xmltree::{Element, EmitterConfig, XMLNode};

/// TestDescriptorGenerator builds single-dependency descriptors
///
/// Pure domain service: it works on an owned deep copy of the original
/// document and never touches the original, which is reused for every
/// declaration of the run.
pub struct TestDescriptorGenerator;

impl TestDescriptorGenerator {
    /// Produces a copy of `descriptor` whose only dependency is `declaration`
    ///
    /// Every `<dependencies>` list in the copy is emptied, wherever it sits in
    /// the tree. The declaration is then appended to the list directly under
    /// the root, which is created if the root had none.
    pub fn generate(descriptor: &Descriptor, declaration: &DependencyDeclaration) -> Element {
        let mut document = descriptor.document().clone();
        clear_dependency_lists(&mut document);

        if document.get_child(DEPENDENCIES).is_none() {
            let mut list = Element::new(DEPENDENCIES);
            list.prefix = document.prefix.clone();
            list.namespace = document.namespace.clone();
            document.children.push(XMLNode::Element(list));
        }

        if let Some(list) = document.get_mut_child(DEPENDENCIES) {
            list.children
                .push(XMLNode::Element(declaration.element().clone()));
        }

        document
    }

    /// Serializes a generated descriptor as an indented XML document
    pub fn render(document: &Element) -> Result<String> {
        let mut buffer = Vec::new();
        let config = EmitterConfig::new().perform_indent(true);
        document
            .write_with_config(&mut buffer, config)
            .context("Failed to serialize test descriptor")?;
        String::from_utf8(buffer).context("Serialized test descriptor is not valid UTF-8")
    }
}

fn clear_dependency_lists(element: &mut Element) {
    for child in element.children.iter_mut() {
        if let XMLNode::Element(child) = child {
            if child.name == DEPENDENCIES {
                child.children.clear();
            } else {
                clear_dependency_lists(child);
            }
        }
    }
}
