/*!
# Algorithms

Transformations applied to a finished [`CsrGraph`](crate::repr::CsrGraph).
Currently this is the degree-based relabelling used to improve locality on
power-law graphs; see [`DegreeRelabel`].
*/

pub mod relabel;

pub use relabel::DegreeRelabel;
