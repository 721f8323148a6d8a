//! Map command - print the floor plan with live seat state.

use anyhow::Result;
use clap::Args;

use super::connect::ConnectArgs;
use super::render;
use crate::engine::FloorSeat;
use crate::floor::Zone;

#[derive(Args)]
pub struct MapCmd {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Highlight seats booked by someone matching this name or id
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Print map coordinates and facing for every seat
    #[arg(long)]
    pub positions: bool,
}

impl MapCmd {
    pub async fn run(&self) -> Result<()> {
        let session = self.connect.connect().await?;
        let query = self.query.as_deref().unwrap_or("");
        let view = session.floor_view(query).await;
        let plan = session.plan();

        for (index, cluster) in plan.clusters().iter().enumerate() {
            let seats: Vec<&FloorSeat> = view.iter().filter(|s| s.placed.cluster == index).collect();

            let cells: Vec<String> = seats
                .iter()
                .map(|s| {
                    let hit = if s.highlighted { "*" } else { "" };
                    format!("{}{}{}", s.seat.id, render::marker(&s.seat), hit)
                })
                .collect();
            println!(
                "{:<6} {:>2}-{:<2}  {}",
                cluster.kind.as_str(),
                cluster.first_id,
                cluster.last_id(),
                cells.join(" ")
            );

            if self.positions {
                for s in &seats {
                    let p = s.placed.placement;
                    println!(
                        "         #{:<3} {:<7} x={:>7.1} y={:>7.1} facing {:>5.1}°",
                        s.seat.id,
                        s.placed.zone.as_str(),
                        p.x,
                        p.y,
                        p.rotation
                    );
                }
            }
        }

        println!();
        let max_id = plan.max_id();
        let zones: Vec<String> = Zone::ALL
            .iter()
            .map(|zone| {
                let range = plan.zones().range(*zone, max_id);
                format!("{} {}-{}", zone, range.start(), range.end())
            })
            .collect();
        println!("Zones: {}", zones.join(", "));
        println!("Legend: . available  x occupied  ? unknown  * search match");

        let free = view.iter().filter(|s| s.seat.is_available()).count();
        println!("\n{} of {} seats available", free, view.len());

        let unplaced = session.unplaced().await;
        if !unplaced.is_empty() {
            let ids: Vec<String> = unplaced.iter().map(|id| format!("#{}", id)).collect();
            println!("Not on the map: {}", ids.join(", "));
        }

        Ok(())
    }
}
