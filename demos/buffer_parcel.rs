//! Buffers a parcel boundary and prints the street search ring.
//!
//! Run with `RUST_LOG=plangeo=debug` to see the geometry trace.

use plangeo::operations::query::PointInRing;
use plangeo::parcel::{search_envelope, ParcelData};
use plangeo::street::Street;

fn main() -> plangeo::Result<()> {
    // Default: WARN for everything, INFO for plangeo.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("plangeo=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let office = [
        [1_229_623.0, 151_187.0],
        [1_229_590.0, 150_990.0],
        [1_229_452.0, 151_014.0],
        [1_229_485.0, 151_211.0],
        [1_229_623.0, 151_187.0],
    ];
    let parcel = ParcelData::from_coords(&office, 0.48)?;
    let envelope = search_envelope(&parcel.location);
    println!(
        "parcel at ({:.2}, {:.2}), search envelope ({:.2}, {:.2})-({:.2}, {:.2})",
        parcel.location.x,
        parcel.location.y,
        envelope.xmin,
        envelope.ymin,
        envelope.xmax,
        envelope.ymax
    );

    let search = parcel.street_search_ring()?;
    for v in &search {
        let outside = PointInRing::new(&parcel.ring, *v).execute()?;
        println!("  ({:.2}, {:.2}) outside={outside}", v.x, v.y);
    }

    for street in [
        Street::classify("BROADWAY ST", "principal arterial", true),
        Street::classify("W 2ND ST", "minor arterial", false),
    ] {
        println!(
            "{} [{}] row={}ft alt={} state={}",
            street.name, street.classification, street.row, street.alt, street.state
        );
    }
    Ok(())
}
