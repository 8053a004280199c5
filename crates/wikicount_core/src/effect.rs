#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RenderHeader,
    RenderRow { index: crate::ArticleIndex },
    RenderSummary,
}
