//! Backtracking N-Queens solvers.
//!
//! This module implements the depth-first enumeration of all ways to place one
//! queen per row on an n x n board so that no two queens share a column or a
//! diagonal. Rows are filled in increasing order and candidate columns are
//! tried in increasing order, so the solution list always comes back in the
//! same lexicographic search order.
//!
//! Two interchangeable solvers implement the same [`QueensSolver`] contract:
//! [`InPlaceSolver`] backtracks over a single mutable column buffer with
//! matching place/remove steps, while [`PersistentSolver`] hands each
//! recursive call its own extended copy of the partial placement. Front-ends
//! pick between them with [`SolveMethod`].

use std::{fmt, str::FromStr, time::Instant};

use crate::board::Placement;

/// Common contract for the interchangeable N-Queens solvers.
///
/// Implementations are deterministic and total: every call with the same `n`
/// produces the identical ordered list, and there is no failure mode. Each
/// solver value owns its working state exclusively, so independent values may
/// be used from independent threads.
pub trait QueensSolver {
    /// Enumerates every solution for an n x n board in search order.
    ///
    /// `solve(0)` returns a single empty placement and boards with no valid
    /// arrangement (n = 2 and n = 3) return an empty list.
    fn solve(&mut self, n: usize) -> Vec<Placement> {
        self.solve_with_limit(n, None)
    }

    /// Enumerates solutions, stopping once `limit` solutions have been
    /// collected. `None` places no cap. The returned list is always a prefix
    /// of the full search ordering.
    fn solve_with_limit(&mut self, n: usize, limit: Option<usize>) -> Vec<Placement>;
}

/// Tests whether a queen in the next row may sit at `column` given the columns
/// already placed in earlier rows. One comparison per placed row: same column
/// or same diagonal disqualifies the candidate.
fn is_safe(placed: &[usize], column: usize) -> bool {
    let row = placed.len();
    placed
        .iter()
        .enumerate()
        .all(|(placed_row, &placed_column)| {
            placed_column != column && placed_column.abs_diff(column) != row - placed_row
        })
}

/// Solver that backtracks over a single reusable column buffer.
///
/// The buffer holds one column per already-filled row. A candidate is pushed
/// before recursing into the next row and popped immediately after, so each
/// recursive call observes exactly the prefix its caller built.
pub struct InPlaceSolver {
    /// Columns of the queens placed so far, indexed by row.
    placed: Vec<usize>,
}

impl InPlaceSolver {
    pub fn new() -> Self {
        InPlaceSolver { placed: Vec::new() }
    }

    fn search(&mut self, n: usize, limit: Option<usize>, solutions: &mut Vec<Placement>) {
        if limit.is_some_and(|limit| solutions.len() >= limit) {
            return;
        }

        // All rows filled: record a copy of the buffer and backtrack.
        if self.placed.len() == n {
            solutions.push(Placement::new(self.placed.clone()));
            return;
        }

        for column in 0..n {
            if is_safe(&self.placed, column) {
                self.placed.push(column);
                self.search(n, limit, solutions);
                self.placed.pop();
            }
        }
    }
}

impl QueensSolver for InPlaceSolver {
    fn solve_with_limit(&mut self, n: usize, limit: Option<usize>) -> Vec<Placement> {
        self.placed.clear();
        self.placed.reserve(n);

        let start_time = Instant::now();
        let mut solutions = Vec::new();
        self.search(n, limit, &mut solutions);
        log::debug!(
            "In-place search found {} solutions for n={n}. (Duration: {:?})",
            solutions.len(),
            start_time.elapsed()
        );

        solutions
    }
}

/// Solver that passes each recursive call its own extended placement.
///
/// Sibling branches never observe each other's state because extending a
/// placement clones it; there is no undo step. The observable contract is
/// identical to [`InPlaceSolver`].
pub struct PersistentSolver;

impl PersistentSolver {
    pub fn new() -> Self {
        PersistentSolver
    }
}

impl QueensSolver for PersistentSolver {
    fn solve_with_limit(&mut self, n: usize, limit: Option<usize>) -> Vec<Placement> {
        fn extend(
            n: usize,
            placed: Vec<usize>,
            limit: Option<usize>,
            solutions: &mut Vec<Placement>,
        ) {
            if limit.is_some_and(|limit| solutions.len() >= limit) {
                return;
            }

            if placed.len() == n {
                solutions.push(Placement::new(placed));
                return;
            }

            for column in 0..n {
                if is_safe(&placed, column) {
                    let mut extended = placed.clone();
                    extended.push(column);
                    extend(n, extended, limit, solutions);
                }
            }
        }

        let start_time = Instant::now();
        let mut solutions = Vec::new();
        extend(n, Vec::with_capacity(n), limit, &mut solutions);
        log::debug!(
            "Persistent search found {} solutions for n={n}. (Duration: {:?})",
            solutions.len(),
            start_time.elapsed()
        );

        solutions
    }
}

/// Enumerated choice between the interchangeable solver implementations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveMethod {
    /// Mutate-and-undo backtracking over one shared buffer.
    InPlace,

    /// Immutable-copy backtracking.
    Persistent,
}

impl SolveMethod {
    /// Creates a fresh solver for this method.
    pub fn create_solver(self) -> Box<dyn QueensSolver> {
        match self {
            SolveMethod::InPlace => Box::new(InPlaceSolver::new()),
            SolveMethod::Persistent => Box::new(PersistentSolver::new()),
        }
    }
}

impl fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolveMethod::InPlace => "in-place",
            SolveMethod::Persistent => "persistent",
        };
        f.write_str(name)
    }
}

impl FromStr for SolveMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-place" => Ok(SolveMethod::InPlace),
            "persistent" => Ok(SolveMethod::Persistent),
            _ => Err(format!(
                "unknown solve method '{s}'; expected 'in-place' or 'persistent'"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn solvers() -> Vec<(SolveMethod, Box<dyn QueensSolver>)> {
        [SolveMethod::InPlace, SolveMethod::Persistent]
            .into_iter()
            .map(|method| (method, method.create_solver()))
            .collect()
    }

    #[test]
    fn solution_counts_for_small_boards() {
        // (n, number of solutions)
        let expected = [(0, 1), (1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];

        for (method, mut solver) in solvers() {
            for (n, count) in expected {
                assert_eq!(
                    solver.solve(n).len(),
                    count,
                    "{method} solver returned the wrong number of solutions for n={n}"
                );
            }
        }
    }

    #[test]
    fn zero_board_yields_single_empty_solution() {
        for (_, mut solver) in solvers() {
            assert_eq!(solver.solve(0), vec![Placement::new(vec![])]);
        }
    }

    #[test]
    fn one_board_places_the_only_queen() {
        for (_, mut solver) in solvers() {
            assert_eq!(solver.solve(1), vec![Placement::new(vec![0])]);
        }
    }

    #[test]
    fn four_queens_solutions_in_search_order() {
        for (_, mut solver) in solvers() {
            let solutions = solver.solve(4);
            assert_eq!(
                solutions,
                vec![Placement::new(vec![1, 3, 0, 2]), Placement::new(vec![2, 0, 3, 1])]
            );
        }
    }

    #[test]
    fn eight_queens_first_solution_is_lexicographically_first() {
        for (_, mut solver) in solvers() {
            let solutions = solver.solve(8);
            assert_eq!(solutions[0], Placement::new(vec![0, 4, 7, 5, 2, 6, 1, 3]));
        }
    }

    #[test]
    fn solutions_are_conflict_free_and_unique() {
        for (method, mut solver) in solvers() {
            let solutions = solver.solve(8);
            for solution in &solutions {
                assert!(
                    solution.is_conflict_free(),
                    "{method} solver produced an attacking placement: {:?}",
                    solution.columns()
                );
            }

            let unique: BTreeSet<&[usize]> =
                solutions.iter().map(|solution| solution.columns()).collect();
            assert_eq!(unique.len(), solutions.len(), "{method} solver repeated a solution");
        }
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        for (_, mut solver) in solvers() {
            let first = solver.solve(6);
            let second = solver.solve(6);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn methods_agree_on_the_full_solution_list() {
        let mut in_place = InPlaceSolver::new();
        let mut persistent = PersistentSolver::new();
        assert_eq!(in_place.solve(6), persistent.solve(6));
        assert_eq!(in_place.solve(8), persistent.solve(8));
    }

    #[test]
    fn limit_returns_a_prefix_of_the_full_ordering() {
        for (_, mut solver) in solvers() {
            let full = solver.solve(8);
            let limited = solver.solve_with_limit(8, Some(5));
            assert_eq!(limited, full[..5]);

            // A cap above the total changes nothing.
            assert_eq!(solver.solve_with_limit(8, Some(1000)), full);
        }
    }

    #[test]
    fn zero_limit_collects_nothing() {
        for (_, mut solver) in solvers() {
            assert!(solver.solve_with_limit(8, Some(0)).is_empty());
        }
    }

    #[test]
    fn solve_method_parses_and_displays() {
        assert_eq!("in-place".parse::<SolveMethod>(), Ok(SolveMethod::InPlace));
        assert_eq!("persistent".parse::<SolveMethod>(), Ok(SolveMethod::Persistent));
        assert_eq!(SolveMethod::InPlace.to_string(), "in-place");
        assert_eq!(SolveMethod::Persistent.to_string(), "persistent");

        let err = "recursive".parse::<SolveMethod>().unwrap_err();
        assert!(err.contains("unknown solve method 'recursive'"));
    }
}
