use clap::Parser;
use log::{info, warn};
use maplinks::portals::{
    find_portals, portal_centers, Color, Raster, DEFAULT_BORDER, DEFAULT_SIZE,
    MIN_SIZE,
};
use maplinks::raster::RgbImage;
use maplinks::svg::Svg;
use maplinks::{triangulate, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Link the portals of a map screenshot into fields and draw the links as SVG
#[derive(Parser, Clone, Debug)]
#[command(version)]
struct Args {
    /// Screenshot to search, a PNG or an 8 bit RGB or RGBA TIFF
    input: PathBuf,

    /// Where to write the SVG, the screenshot is referenced as its background
    output: PathBuf,

    /// Portal border color as 0xRRGGBB, #RRGGBB or a decimal integer
    #[arg(short, long, default_value_t = DEFAULT_BORDER, value_parser = parse_color)]
    border: u32,

    /// Portal diameter in pixels
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SIZE,
        value_parser = clap::value_parser!(u32).range(MIN_SIZE as i64..)
    )]
    size: u32,

    /// Also draw a circle around every portal found
    #[arg(short, long, action)]
    draw_portals: bool,
}

fn parse_color(s: &str) -> std::result::Result<u32, String> {
    let parsed = if let Some(hex) = s.strip_prefix('#').or_else(|| s.strip_prefix("0x")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    match parsed {
        Ok(rgb) if rgb <= 0xFFFFFF => Ok(rgb),
        Ok(_) => Err(format!("{} is larger than 0xFFFFFF", s)),
        Err(e) => Err(format!("{}: {}", s, e)),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();
    let args = Args::parse();

    let border = Color::from(args.border);
    info!("Target color: {}", border);

    let screenshot = RgbImage::read(BufReader::new(File::open(&args.input)?))?;
    let (width, height) = screenshot.dimensions();
    let mut svg = Svg::new(width, height);
    svg.add_image(args.input.to_string_lossy(), width, height);

    info!("Searching image for portals");
    let portals = find_portals(&screenshot, border, args.size);
    info!("Found {} portals", portals.len());
    if portals.len() < 3 {
        warn!("Need at least 3 portals to make a field");
    }
    if args.draw_portals {
        for portal in portals.iter() {
            svg.add_portal(*portal);
        }
    }

    info!("Triangulating fields");
    let fields = triangulate(&portal_centers(&portals))?;
    info!("Found {} fields", fields.len());

    info!("Drawing links");
    let links = fields.links();
    for link in links.iter() {
        svg.add_link(link.from, link.to);
    }
    info!("Drew {} links", links.len());

    info!("Saving to {}", args.output.display());
    let mut out = BufWriter::new(File::create(&args.output)?);
    svg.write_to(&mut out)?;
    out.flush()?;
    info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors() {
        assert_eq!(parse_color("16750848"), Ok(0xFF9900));
        assert_eq!(parse_color("0xFF9900"), Ok(0xFF9900));
        assert_eq!(parse_color("#ff9900"), Ok(0xFF9900));
        assert!(parse_color("#1000000").is_err());
        assert!(parse_color("orange").is_err());
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["maplinks", "in.png", "out.svg"]).unwrap();
        assert_eq!(args.border, 16750848);
        assert_eq!(args.size, 16);
        assert!(!args.draw_portals);
        assert!(Args::try_parse_from(["maplinks", "-s", "1", "in.png", "out.svg"]).is_err());
    }
}
