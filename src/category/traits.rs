pub trait Arrow: Sized {
    type Object;

    fn source(&self) -> Self::Object;
    fn target(&self) -> Self::Object;

    /// the identity morphism on `a`
    fn identity(a: Self::Object) -> Self;

    /// Compose morphisms in diagrammatic order: `self ; other`
    ///
    /// # Errors
    ///
    /// Returns None if `self.target() != other.source()`.
    fn compose(&self, other: &Self) -> Option<Self>;
}

/// Arrows with a converse `f† : b → a` for every `f : a → b`.
///
/// For relations this swaps each pair; for matrices it is the transpose.
/// Implementations satisfy `(f ; g)† == g† ; f†`.
pub trait Converse: Arrow {
    fn converse(&self) -> Self;
}
