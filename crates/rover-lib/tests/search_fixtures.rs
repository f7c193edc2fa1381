mod common;

use rover_lib::{plan_route, Error, Location, PathSearch, SearchOutcome};

use common::fixture_grid;

#[test]
fn sample_grid_routes_around_the_ridge() {
    let grid = fixture_grid("sample_5x5.csv").expect("fixture loads");
    let report = plan_route(&grid).expect("route exists");

    assert_eq!(
        report.path,
        vec![
            Location::new(0, 0),
            Location::new(1, 0),
            Location::new(2, 1),
            Location::new(3, 2),
            Location::new(4, 3),
            Location::new(4, 4),
        ]
    );
    assert_eq!(report.steps, 5);
    assert_eq!(report.fuel, 14);
    assert_eq!(
        report.render_text(),
        "[0][0]->[1][0]->[2][1]->[3][2]->[4][3]->[4][4]\nsteps: 5\nfuel: 14"
    );
}

#[test]
fn flat_grid_follows_first_logged_arrivals() {
    // The alternating surcharge pushes the search off the pure diagonal, and
    // the first-arrival reconstruction keeps the detour.
    let grid = fixture_grid("flat_4x4.csv").expect("fixture loads");
    let search = PathSearch::run(&grid).expect("search runs");
    let path = search.extract_path().expect("path exists");

    assert_eq!(
        path,
        vec![
            Location::new(0, 0),
            Location::new(1, 1),
            Location::new(2, 1),
            Location::new(3, 2),
            Location::new(3, 3),
        ]
    );
    assert_eq!(search.extract_cost(&path).unwrap(), 5);
    assert_eq!(search.cost_to(grid.goal()), Some(4));
}

#[test]
fn ridge_grid_reports_path_walk_fuel() {
    let grid = fixture_grid("ridge_3x3.csv").expect("fixture loads");
    let report = plan_route(&grid).expect("route exists");

    assert_eq!(report.render_text(), "[0][0]->[0][1]->[1][2]->[2][2]\nsteps: 3\nfuel: 3");
}

#[test]
fn walled_goal_exhausts_the_frontier() {
    let grid = fixture_grid("walled_goal.csv").expect("fixture loads");
    let search = PathSearch::run(&grid).expect("search runs");

    assert_eq!(search.outcome(), SearchOutcome::FrontierExhausted);
    let error = search.extract_path().expect_err("goal is unreachable");
    assert!(matches!(error, Error::GoalUnreachable { .. }));
    assert_eq!(error.to_string(), "no path found from [0][0] to [3][2]");
}

#[test]
fn blocked_endpoints_and_bad_tokens_stop_the_rover() {
    let start = fixture_grid("blocked_start.csv").expect_err("start blocked");
    assert!(matches!(start, Error::StartImpassable));
    assert!(start.is_start_failure());

    let goal = fixture_grid("blocked_goal.csv").expect_err("goal blocked");
    assert!(matches!(goal, Error::GoalImpassable));

    let malformed = fixture_grid("malformed.csv").expect_err("bad token");
    assert!(format!("{malformed}").contains("malformed grid"));
}

#[test]
fn parity_advances_once_per_expanded_cell() {
    // Expanding (0,1) relaxes two diagonals; only the first moves the parity,
    // so (1,2) keeps its surcharge-free cost and the route cuts across.
    let grid = fixture_grid("divide_3x4.csv").expect("fixture loads");
    let report = plan_route(&grid).expect("route exists");

    assert_eq!(
        report.path,
        vec![
            Location::new(0, 0),
            Location::new(0, 1),
            Location::new(1, 2),
            Location::new(2, 3),
        ]
    );
    assert_eq!(
        report.render_text(),
        "[0][0]->[0][1]->[1][2]->[2][3]\nsteps: 3\nfuel: 4"
    );
}
