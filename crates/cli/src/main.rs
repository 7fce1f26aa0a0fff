use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::json;
use starpoly::prelude::{
    draw_star_polygon, sample_rect, write_svg, Location, OriginStrategy, Point, Polygon,
    RadialCfg, StarCfg, StarPolygon, SvgCanvas, Vec2, VertexCount,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "starpoly-cli")]
#[command(about = "Random star polygons and logarithmic point-in-polygon queries")]
struct Cmd {
    /// RNG seed; drawn from OS entropy (and recorded in provenance) when omitted
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value_t = tracing::Level::INFO)]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a random polygon, classify random points, render an SVG
    Demo {
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        polygon: PolygonArgs,
        #[arg(long, default_value_t = 10_000)]
        queries: usize,
        #[arg(long, default_value_t = 840)]
        width: u32,
        #[arg(long, default_value_t = 640)]
        height: u32,
    },
    /// Classify points from a CSV (`x`,`y` columns) and write `x,y,location`
    Classify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Polygon vertices as CSV (`x`,`y`, counter-clockwise); drawn at random when omitted
        #[arg(long)]
        polygon_csv: Option<PathBuf>,
        #[command(flatten)]
        polygon: PolygonArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug, Serialize)]
struct PolygonArgs {
    #[arg(long, default_value_t = 30)]
    vertices: usize,
    #[arg(long, default_value_t = 400.0)]
    center_x: f64,
    #[arg(long, default_value_t = 300.0)]
    center_y: f64,
    #[arg(long, default_value_t = 300.0)]
    radius: f64,
    /// Interior reference point used when preprocessing the polygon
    #[arg(long, value_enum, default_value_t = OriginArg::FirstThree)]
    origin: OriginArg,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum OriginArg {
    /// Mean of the first three vertices
    FirstThree,
    /// Area-weighted centroid
    Area,
}

impl PolygonArgs {
    fn radial_cfg(&self) -> RadialCfg {
        RadialCfg {
            vertex_count: VertexCount::Fixed(self.vertices),
            center: Vec2::new(self.center_x, self.center_y),
            radius: self.radius,
        }
    }

    fn star_cfg(&self) -> StarCfg {
        let origin = match self.origin {
            OriginArg::FirstThree => OriginStrategy::FirstThreeCentroid,
            OriginArg::Area => OriginStrategy::AreaCentroid,
        };
        StarCfg {
            origin,
            ..StarCfg::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
struct Counts {
    inside: usize,
    outside: usize,
    boundary: usize,
}

impl Counts {
    fn tally(labels: impl IntoIterator<Item = Location>) -> Self {
        let mut c = Counts::default();
        for l in labels {
            match l {
                Location::Inside => c.inside += 1,
                Location::Outside => c.outside += 1,
                Location::OnBoundary => c.boundary += 1,
            }
        }
        c
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .init();
    let seed = cmd.seed.unwrap_or_else(|| rand::thread_rng().gen());
    match cmd.action {
        Action::Demo {
            out,
            polygon,
            queries,
            width,
            height,
        } => demo(&out, &polygon, queries, SvgCanvas { width, height }, seed),
        Action::Classify {
            input,
            out,
            polygon_csv,
            polygon,
        } => classify(&input, &out, polygon_csv.as_deref(), &polygon, seed),
        Action::Report => report(),
    }
}

fn generate_star(args: &PolygonArgs, rng: &mut StdRng) -> Result<StarPolygon> {
    let poly = draw_star_polygon(&args.radial_cfg(), rng).context("drawing star polygon")?;
    let star = poly
        .preprocess(&args.star_cfg())
        .context("preprocessing polygon")?;
    log_polygon(&star);
    Ok(star)
}

fn log_polygon(star: &StarPolygon) {
    let origin = star.origin();
    tracing::info!(
        n = star.len(),
        origin_x = origin.x,
        origin_y = origin.y,
        rotation = star.rotation_index(),
        "polygon_ready"
    );
}

fn demo(
    out: &Path,
    args: &PolygonArgs,
    queries: usize,
    canvas: SvgCanvas,
    seed: u64,
) -> Result<()> {
    tracing::info!(out = %out.display(), seed, queries, "demo");
    if canvas.width < 3 || canvas.height < 3 {
        bail!("canvas must be at least 3x3 pixels");
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let star = generate_star(args, &mut rng)?;

    let lo = Vec2::new(1.0, 1.0);
    let hi = Vec2::new(
        f64::from(canvas.width) - 1.0,
        f64::from(canvas.height) - 1.0,
    );
    let classified: Vec<(Point, Location)> = (0..queries)
        .map(|_| {
            let p = sample_rect(&mut rng, lo, hi);
            (p, star.contains(p))
        })
        .collect();
    let counts = Counts::tally(classified.iter().map(|(_, l)| *l));
    tracing::info!(
        inside = counts.inside,
        outside = counts.outside,
        boundary = counts.boundary,
        "classified"
    );

    create_parent(out)?;
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    let mut writer = BufWriter::new(file);
    write_svg(&mut writer, canvas, &star, &classified)
        .and_then(|_| writer.flush())
        .with_context(|| format!("writing {}", out.display()))?;

    let params = json!({
        "command": "demo",
        "polygon": args,
        "queries": queries,
        "canvas": { "width": canvas.width, "height": canvas.height },
        "counts": counts
    });
    provenance::write_sidecar(out, Payload::new(params).with_seed(seed))?;
    Ok(())
}

fn classify(
    input: &Path,
    out: &Path,
    polygon_csv: Option<&Path>,
    args: &PolygonArgs,
    seed: u64,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "classify");
    let star = match polygon_csv {
        Some(path) => {
            let star = Polygon::new(read_points(path)?)
                .with_context(|| format!("polygon from {}", path.display()))?
                .preprocess(&args.star_cfg())
                .context("preprocessing polygon")?;
            log_polygon(&star);
            star
        }
        None => generate_star(args, &mut StdRng::seed_from_u64(seed))?,
    };

    let points = read_points(input)?;
    let locations = star.classify_all(&points);
    let counts = Counts::tally(locations.iter().copied());
    tracing::info!(
        rows = points.len(),
        inside = counts.inside,
        outside = counts.outside,
        boundary = counts.boundary,
        "classified"
    );

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let labels: Vec<&str> = locations.iter().map(|l| l.label()).collect();
    let mut df = df!("x" => &xs, "y" => &ys, "location" => &labels)?;

    create_parent(out)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", out.display()))?;

    let params = json!({
        "command": "classify",
        "input": input.to_string_lossy(),
        "polygon_csv": polygon_csv.map(|p| p.to_string_lossy().into_owned()),
        "polygon": args,
        "counts": counts
    });
    provenance::write_sidecar(out, Payload::new(params).with_seed(seed))?;
    Ok(())
}

fn report() -> Result<()> {
    let defaults = RadialCfg::default();
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": starpoly::VERSION,
        "defaults": {
            "center": [defaults.center.x, defaults.center.y],
            "radius": defaults.radius,
            "canvas": [SvgCanvas::default().width, SvgCanvas::default().height]
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Read `x`,`y` columns of a headed CSV as points.
fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    tracing::debug!(path = %path.display(), rows = df.height(), "read_points");
    Ok(xs.into_iter().zip(ys).map(|(x, y)| Vec2::new(x, y)).collect())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column {name}"))?
        .cast(&DataType::Float64)?;
    let values = col
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("empty {name} at row {row}")))
        .collect::<Result<Vec<f64>>>()?;
    Ok(values)
}

fn create_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
