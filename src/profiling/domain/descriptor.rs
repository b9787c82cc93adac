use crate::shared::error::ProfilerError;
use crate::shared::security::ensure_file_name_component;
use crate::shared::Result;
use xmltree::{Element, XMLNode};

/// Element name of a dependency list (`<dependencies>`)
pub const DEPENDENCIES: &str = "dependencies";

/// Element name of a single dependency declaration (`<dependency>`)
pub const DEPENDENCY: &str = "dependency";

/// One `<dependency>` entry of a build descriptor.
///
/// Keeps an owned copy of the original element so it can be injected
/// verbatim (scope, exclusions, classifier...) into a test descriptor.
#[derive(Debug, Clone)]
pub struct DependencyDeclaration {
    element: Element,
    group_id: String,
    artifact_id: String,
    version: Option<String>,
}

impl DependencyDeclaration {
    /// Extracts coordinates from a `<dependency>` element.
    ///
    /// `index` is the zero-based position in the descriptor, used only for
    /// error messages.
    ///
    /// # Errors
    /// Returns `MalformedDescriptor` if `<groupId>` or `<artifactId>` is
    /// missing or blank.
    pub fn from_element(element: &Element, index: usize) -> Result<Self> {
        let group_id = child_text(element, "groupId").ok_or_else(|| {
            ProfilerError::MalformedDescriptor {
                details: format!("dependency #{} has no <groupId>", index + 1),
            }
        })?;
        let artifact_id = child_text(element, "artifactId").ok_or_else(|| {
            ProfilerError::MalformedDescriptor {
                details: format!(
                    "dependency #{} ({}) has no <artifactId>",
                    index + 1,
                    group_id
                ),
            }
        })?;

        Ok(Self {
            element: element.clone(),
            group_id,
            artifact_id,
            version: child_text(element, "version"),
        })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Parsed build descriptor (`pom.xml`).
///
/// The document tree is never mutated after parsing; test descriptors are
/// produced from deep copies of it.
#[derive(Debug, Clone)]
pub struct Descriptor {
    document: Element,
    root_artifact_id: String,
    declarations: Vec<DependencyDeclaration>,
}

impl Descriptor {
    /// Parses a descriptor from its XML text.
    ///
    /// Declarations are collected from every `<dependencies>` list in the
    /// document (including `<dependencyManagement>` and plugin sections), in
    /// document order. Duplicates are kept.
    ///
    /// # Errors
    /// Returns `MalformedDescriptor` if the XML is invalid, the root has no
    /// `<artifactId>` usable as a report file name, or any declaration lacks
    /// its group or artifact id.
    pub fn parse(xml: &str) -> Result<Self> {
        let document =
            Element::parse(xml.as_bytes()).map_err(|e| ProfilerError::MalformedDescriptor {
                details: format!("invalid XML: {}", e),
            })?;

        let root_artifact_id =
            child_text(&document, "artifactId").ok_or_else(|| ProfilerError::MalformedDescriptor {
                details: format!("root <{}> element has no <artifactId>", document.name),
            })?;
        // The report is named after it
        ensure_file_name_component(&root_artifact_id).map_err(|e| {
            ProfilerError::MalformedDescriptor {
                details: format!("root <artifactId> {}", e),
            }
        })?;

        let mut elements = Vec::new();
        collect_declarations(&document, &mut elements);

        let declarations = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| DependencyDeclaration::from_element(element, index))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            document,
            root_artifact_id,
            declarations,
        })
    }

    pub fn document(&self) -> &Element {
        &self.document
    }

    pub fn root_artifact_id(&self) -> &str {
        &self.root_artifact_id
    }

    pub fn declarations(&self) -> &[DependencyDeclaration] {
        &self.declarations
    }
}

/// Trimmed, non-empty text of the first direct child named `name`.
fn child_text(element: &Element, name: &str) -> Option<String> {
    element
        .get_child(name)
        .and_then(|child| child.get_text())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

fn collect_declarations<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    for child in element.children.iter().filter_map(XMLNode::as_element) {
        if child.name == DEPENDENCIES {
            out.extend(
                child
                    .children
                    .iter()
                    .filter_map(XMLNode::as_element)
                    .filter(|entry| entry.name == DEPENDENCY),
            );
        }
        collect_declarations(child, out);
    }
}
