//! Internal scratch primitives shared by the graph algorithms.

pub(crate) mod visited;

pub(crate) use visited::VisitedSet;
