//! Per-molecule population state and the binding-surface identity handle.

/// Opaque identity token for a surface a [`Population`] fraction may be
/// attached to (the cortex, a centrosome, …). Per §9, represented as an
/// identity handle rather than a back-pointer, to keep Population free of
/// reference cycles; binding semantics beyond "who owns this fraction"
/// belong to the collaborator that mints these handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingSurface(pub u64);

/// A molecule's count within a compartment, plus an optional weak
/// attachment to a [`BindingSurface`] (§3).
///
/// Invariants: `count` never goes below zero in committed state;
/// `bound_to` may only be reassigned while unbound, or reassigned to the
/// same surface it already holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Population {
    pub count: f64,
    bound_to: Option<BindingSurface>,
}

impl Population {
    pub fn new(count: f64) -> Self {
        Self { count, bound_to: None }
    }

    pub fn is_bound(&self) -> bool {
        self.bound_to.is_some()
    }

    pub fn binding_surface(&self) -> Option<BindingSurface> {
        self.bound_to
    }

    /// Bind this population to `surface`. Panics (a programming error in
    /// the caller) if already bound to a *different* surface — unbind
    /// first.
    pub fn bind_to(&mut self, surface: BindingSurface) {
        assert!(
            self.bound_to.is_none() || self.bound_to == Some(surface),
            "Population already bound to a different surface; unbind() first"
        );
        self.bound_to = Some(surface);
    }

    pub fn unbind(&mut self) {
        self.bound_to = None;
    }
}

impl Default for Population {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_then_rebind_same_surface_is_fine() {
        let mut pop = Population::new(10.0);
        let surface = BindingSurface(1);
        pop.bind_to(surface);
        pop.bind_to(surface);
        assert_eq!(pop.binding_surface(), Some(surface));
    }

    #[test]
    #[should_panic]
    fn rebind_different_surface_panics() {
        let mut pop = Population::new(10.0);
        pop.bind_to(BindingSurface(1));
        pop.bind_to(BindingSurface(2));
    }

    #[test]
    fn unbind_then_bind_different_surface_is_fine() {
        let mut pop = Population::new(10.0);
        pop.bind_to(BindingSurface(1));
        pop.unbind();
        pop.bind_to(BindingSurface(2));
        assert_eq!(pop.binding_surface(), Some(BindingSurface(2)));
    }
}
