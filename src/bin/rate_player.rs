// Applies one rating period to a serialized player: pass game results
// as rating,rd,score triples, or none at all to decay an idle player.
use glicko_skill::system_config::SystemConfig;
use glicko_skill::systems::{Outcome, Player, Rating};

fn parse_result(arg: &str) -> Option<(Rating, Outcome)> {
    let mut parts = arg.split(',');
    let mu = parts.next()?.trim().parse().ok()?;
    let sig = parts.next()?.trim().parse().ok()?;
    let score = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((Rating { mu, sig }, Outcome::from_score(score)?))
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        tracing::error!(
            "Usage: {} params_file player_file [rating,rd,score]...",
            args[0]
        );
        return;
    }
    let config = SystemConfig::from_file(&args[1]);
    let system = config.rating_system().expect("Unrecognized rating system");

    let player_file = std::path::Path::new(&args[2]);
    let mut player = if player_file.exists() {
        let json = std::fs::read_to_string(player_file).expect("Failed to read player file");
        serde_json::from_str(&json).expect("Failed to parse player as JSON")
    } else {
        tracing::info!("{} not found, starting from an unrated player", args[2]);
        Player::unrated()
    };

    let mut opponents = vec![];
    let mut outcomes = vec![];
    for arg in &args[3..] {
        let (foe, outcome) = parse_result(arg)
            .unwrap_or_else(|| panic!("Bad result {:?}, expected rating,rd,score", arg));
        opponents.push(foe);
        outcomes.push(outcome);
    }

    if opponents.is_empty() {
        system.decay_inactive(&mut player);
    } else {
        system
            .round_update(&mut player, &opponents, &outcomes)
            .expect("Rating update failed");
    }

    let json = serde_json::to_string_pretty(&player).expect("Failed to serialize player");
    std::fs::write(player_file, &json).expect("Failed to write player file");
    println!("{}", json);
}
