/*!
Procedures for determining the satisfiability of a formula.

The algorithm is the Davis–Putnam–Logemann–Loveland procedure, with atoms chosen at random:

- [transform] reduces a formula relative to the value of a single atom.
- [propagate] values atoms forced by unit clauses, until no unit clause remains.
- [decision] draws an atom from the [pool](crate::db::pool) and decides which polarity of the atom to try first.
- [dpll] combines the above in a recursive search, trying both polarities of a drawn atom on copies of a formula.
- [solve] sets up and finishes a search on the formula of a [context](crate::context).

Roughly, a single call to [dpll](crate::context::GenericContext::dpll) is:

```none
              +-----> satisfied: the formula is reported, the search is complete
              |
  +-----------+----+
  | unit_propagate |-----> unsatisfied: the branch is abandoned
  +----------------+
              |
              | otherwise
              ⌄
  +--------------------+
  | select_random_atom |-----> no atom: the branch is abandoned
  +--------------------+
              |
              | for each polarity, on a copy of the formula
              ⌄
  +-----------------+
  | apply_transform |-----> satisfied / unsatisfied, as above
  +-----------------+
              |
              | otherwise
              ⌄
            dpll
```

Reductions and propagation return a [Status], while a search returns a [SearchOk].
*/

pub mod decision;
pub mod dpll;
pub mod propagate;
pub mod solve;
pub mod transform;

/// The status of a formula after some reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// The formula has no clauses.
    Satisfied,

    /// Some clause of the formula is empty.
    Unsatisfied,

    /// Neither of the above was found.
    Normal,
}

/// Possible results of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOk {
    /// The search finished without finding a satisfied formula.
    Normal,

    /// A satisfied formula was found and reported, and no further search is required.
    Completed,
}
