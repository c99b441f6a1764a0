use crate::domain::analysis::ports::SemanticAnalyzer;

/// Bundles the external collaborators the analysis engine depends on.
///
/// Collaborators are injected at construction time; the engine never reaches
/// into process-wide state to find them.
#[derive(Debug, Clone)]
pub struct Service<SA>
where
    SA: SemanticAnalyzer,
{
    pub(crate) semantic_analyzer: SA,
}

impl<SA> Service<SA>
where
    SA: SemanticAnalyzer,
{
    pub fn new(semantic_analyzer: SA) -> Self {
        Self { semantic_analyzer }
    }
}
