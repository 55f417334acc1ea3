/*!
Databases shared across a solve.

At present, the only such database is the [pool](pool) of atoms without a value.

Formulas are copied at each branch of a search, and so are not stored in a database.
The pool is not copied, and each branch of the search reads and revises the same pool.
*/

pub mod pool;
