use sonarcore::filter::DepthFilter;
use sonarcore::{Beam, SonarPing};

pub fn step_banner(step: usize, title: &str) -> String {
    format!("--- [Step {}] {} ---", step, title)
}

pub fn header_line(ping: &SonarPing) -> String {
    format!(
        "Header Info -> Time: {}, Heading: {}, Beams: {}",
        ping.timestamp,
        ping.ship_heading_deg,
        ping.beam_count()
    )
}

pub fn verify_line(beam: &Beam) -> String {
    format!(
        "Beam ID: {} | Depth: {}m | Intensity: {}dB",
        beam.id, beam.depth_m, beam.intensity_db
    )
}

/// Row for the filtered listing; the angle sits in a fixed-width column.
pub fn filtered_line(beam: &Beam) -> String {
    format!(
        "Beam ID: {} | Angle: {:>6.1} deg | Depth: {}m | Intensity: {}dB",
        beam.id, beam.angle_deg, beam.depth_m, beam.intensity_db
    )
}

pub fn verify_lines(ping: &SonarPing) -> Vec<String> {
    ping.beams.iter().map(verify_line).collect()
}

pub fn filtered_lines(ping: &SonarPing, filter: &DepthFilter) -> Vec<String> {
    filter
        .select(ping)
        .into_iter()
        .map(filtered_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::sample_ping;

    #[test]
    fn header_line_reports_counts() {
        assert_eq!(
            header_line(&sample_ping()),
            "Header Info -> Time: 1716345600, Heading: 90.5, Beams: 4"
        );
    }

    #[test]
    fn verify_lines_list_every_beam() {
        let lines = verify_lines(&sample_ping());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Beam ID: 1 | Depth: 100.5m | Intensity: -20dB");
        assert_eq!(lines[1], "Beam ID: 2 | Depth: 98.2m | Intensity: -15.5dB");
    }

    #[test]
    fn filtered_lines_skip_shallow_beams_and_pad_angle() {
        let lines = filtered_lines(&sample_ping(), &DepthFilter::new(100.0));
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Beam ID: 1 | Angle:  -45.0 deg | Depth: 100.5m | Intensity: -20dB"
        );
        assert!(lines[1].starts_with("Beam ID: 3 | Angle:   45.0 deg"));
        assert!(lines[2].starts_with("Beam ID: 4 | Angle:   60.0 deg"));
    }
}
