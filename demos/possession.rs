use possession::ball::{interpolate, remove_wrong_detections, BallFilterConfig};
use possession::stats::{team_ball_control, PossessionStats, TeamId};
use possession::{BallAcquisitionDetector, BallFrame, PlayerFrame, PlayerId, PossessionConfig};

use serde_derive::Deserialize;
use std::collections::HashMap;
use std::io::BufRead;

/// One line of the input file.
#[derive(Deserialize, Default)]
struct FrameRecord {
    #[serde(default)]
    ball: BallFrame,
    #[serde(default)]
    players: PlayerFrame,
    #[serde(default)]
    teams: HashMap<PlayerId, TeamId>,
}

/// One record per non-blank line. Lines that fail to parse become empty
/// frames, so frame numbers keep matching the input.
fn read_frames<R: BufRead>(reader: R) -> std::io::Result<Vec<FrameRecord>> {
    let mut records = Vec::new();

    for (num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(err) => {
                eprintln!("line {}: wrong file format: {}", num + 1, err);
                FrameRecord::default()
            }
        };

        records.push(record);
    }

    Ok(records)
}

fn main() -> Result<(), anyhow::Error> {
    let mut args = std::env::args();

    let _ = args.next();
    let in_file_name = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("expected frames file name"))?;
    let defaults = PossessionConfig::default();
    let min_frames = match args.next() {
        Some(x) => x.parse()?,
        None => defaults.min_frames,
    };
    let possession_threshold = match args.next() {
        Some(x) => x.parse()?,
        None => defaults.possession_threshold,
    };
    let containment_threshold = match args.next() {
        Some(x) => x.parse()?,
        None => defaults.containment_threshold,
    };

    let reader = std::io::BufReader::new(std::fs::File::open(in_file_name)?);
    let records = read_frames(reader)?;

    let mut players = Vec::with_capacity(records.len());
    let mut balls = Vec::with_capacity(records.len());
    let mut teams = Vec::with_capacity(records.len());

    for record in records {
        players.push(record.players);
        balls.push(record.ball);
        teams.push(record.teams);
    }

    let removed = remove_wrong_detections(&mut balls, &BallFilterConfig::default());
    let balls = interpolate(&balls);

    let detector = BallAcquisitionDetector::new(PossessionConfig::new(
        possession_threshold,
        min_frames,
        containment_threshold,
    ))?;
    eprintln!("using {:?}", detector.config());
    let timeline = detector.detect_ball_possession(&players, &balls)?;

    let control = team_ball_control(&timeline, &teams)?;
    let stats = PossessionStats::from_control(&control);

    for (frame, owner) in timeline.iter().enumerate() {
        match owner {
            Some(id) => println!("{} {}", frame, id),
            None => println!("{} -", frame),
        }
    }

    eprintln!("{} frames, {} ball outliers dropped", timeline.len(), removed);
    for (id, frames) in timeline.frames_per_player() {
        eprintln!("player {}: {} frames", id, frames);
    }
    for team in stats.frames_per_team.keys() {
        eprintln!("team {}: {:.1}%", team, stats.share(*team) * 100.0);
    }

    Ok(())
}
