// roadmap_builder_main.rs
//
// Usage:
//   roadmap_builder_main <grid.json>
//   roadmap_builder_main --demo <width> <height> [seed]
//
// Prints the built road map and its render plan as JSON.
use rand::rngs::StdRng;
use rand::SeedableRng;
use roadmap_builder::road_network::grid_generator::generate_ring_grid;
use roadmap_builder::road_network::render_plan::RenderPlan;
use roadmap_builder::{build_advanced_info, RoadMap, RoadMapError, RoadMapInfo};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Serialize)]
struct BuildOutput<'a> {
    road_map: &'a RoadMap,
    render_plan: RenderPlan,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Road map build failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<String, RoadMapError> {
    let road_map_info = match args {
        [flag, width, height, rest @ ..] if flag == "--demo" => {
            let width = parse_arg(width, "width")?;
            let height = parse_arg(height, "height")?;
            let seed = match rest.first() {
                Some(seed) => parse_arg(seed, "seed")?,
                None => 0,
            };
            let mut rng = StdRng::seed_from_u64(seed);
            generate_ring_grid(width, height, &mut rng)?
        }
        [path] => RoadMapInfo::load(path).await?,
        _ => {
            return Err(RoadMapError::invalid_input(
                "usage: roadmap_builder_main <grid.json> | --demo <width> <height> [seed]",
            ))
        }
    };

    let road_map = build_advanced_info(&road_map_info)?;
    let output = BuildOutput {
        render_plan: RenderPlan::new(&road_map),
        road_map: &road_map,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

fn parse_arg<T: std::str::FromStr>(value: &str, name: &str) -> Result<T, RoadMapError> {
    value
        .parse()
        .map_err(|_| RoadMapError::invalid_input(format!("invalid {name}: {value}")))
}
