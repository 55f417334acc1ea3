/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain a fresh atom.
- [add_clause](crate::context::GenericContext::add_clause), to add a clause.

In rough strokes, the pattern is to:
- Obtain a collection of atoms to represent a clause.
- Create [CLiteral](crate::structures::literal::CLiteral)s from the atoms.
- Bundle the literals into a [CClause](crate::structures::clause::CClause).
- Add the clause to the context.

Alternatively, a formula may be read from a DIMACS input with [read_dimacs](crate::context::GenericContext::read_dimacs).

# Examples

A clause built using basic methods.

```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
# use dpll_sat::structures::{clause::CClause, literal::{CLiteral, Literal}};
#
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_atom().unwrap();
let q = the_context.fresh_atom().unwrap();

let clause_a = CClause::from([CLiteral::new(p, true), CLiteral::new(q, false)]);
let clause_b = CClause::from([CLiteral::new(p, false), CLiteral::new(q, true)]);

assert!(the_context.add_clause(clause_a).is_ok());
assert!(the_context.add_clause(clause_b).is_ok());
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```

The same formula, read from DIMACS.

```rust
# use dpll_sat::context::Context;
# use dpll_sat::config::Config;
# use dpll_sat::reports::Report;
let mut the_context = Context::from_config(Config::default());

let dimacs = "
c p iff q
p cnf 2 2
 1 -2 0
-1  2 0
";

let info = the_context.read_dimacs(dimacs.as_bytes()).unwrap();
assert_eq!(info.added_clauses, 2);
assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
```
*/

mod dimacs;

/// Counts noted while reading a DIMACS input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The count of atoms declared by the problem specification.
    pub expected_atoms: usize,

    /// The count of clauses declared by the problem specification.
    pub expected_clauses: usize,

    /// The count of clauses added to the context.
    pub added_clauses: usize,
}
