//! Plain-text rendering of elevator snapshots

use std::fmt::Write;

use crate::simulation::{RideRequest, StateSnapshot, StepReport};

/// Convert a list of passengers to a readable string
/// Example: "3 to 9, 5 to 7", or "None" when empty
pub fn format_passengers(list: &[RideRequest]) -> String {
    if list.is_empty() {
        return "None".to_string();
    }
    list.iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Draw the building from the top floor down
///
/// The elevator's floor shows its direction and passengers; any floor with
/// waiting passengers lists them on the right.
pub fn render_building(snapshot: &StateSnapshot) -> String {
    let mut out = String::from("\nBuilding state:\n");
    for floor in (1..=snapshot.floor_count).rev() {
        let _ = write!(out, "[{:02}]  ", floor);

        if floor == snapshot.current_floor {
            let _ = write!(
                out,
                "[ ELEVATOR {} ]  Inside: {}",
                snapshot.direction,
                format_passengers(&snapshot.riding)
            );
        } else {
            out.push_str("[            ]");
        }

        let waiting_here = snapshot.waiting_on(floor);
        if !waiting_here.is_empty() {
            let _ = write!(out, "  Waiting: {}", format_passengers(&waiting_here));
        }
        out.push('\n');
    }
    out
}

/// Status block for debugging
pub fn render_status(snapshot: &StateSnapshot) -> String {
    format!(
        "\n--- STATUS ---\n\
         Current floor: {} | Direction: {}\n\
         Passengers inside: {}\n\
         Waiting passengers: {}\n\
         ----------------\n",
        snapshot.current_floor,
        snapshot.direction,
        format_passengers(&snapshot.riding),
        format_passengers(&snapshot.waiting),
    )
}

/// Everything printed for one step: header, pickups and drop-offs, building
pub fn render_step(report: &StepReport) -> String {
    let mut out = format!("Elevator moving... Current floor: {}\n", report.from_floor);
    for request in &report.dropped_off {
        let _ = writeln!(out, "  >> Dropped off passenger {}", request);
    }
    for request in &report.picked_up {
        let _ = writeln!(out, "  >> Picked up passenger {}", request);
    }
    out.push_str(&render_building(&report.snapshot));
    out
}
