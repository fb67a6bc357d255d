//! Synthetic Biobío-style transport dataset for the headless demo.
//!
//! Six municipalities hauling to three landfills, with curved route
//! geometries for the major corridors and recycled return volumes on two
//! of them.  Coordinates are plausible for the region but hand-placed.

use fv_core::{Color, GeoPoint};
use fv_model::{Dataset, TransportRow};

fn row(
    municipality: &str,
    landfill: &str,
    route: &str,
    tons: f64,
    recycled_tons: f64,
) -> TransportRow {
    TransportRow {
        municipality: municipality.to_owned(),
        landfill:     landfill.to_owned(),
        route:        route.to_owned(),
        tons,
        recycled_tons,
    }
}

pub fn build_dataset() -> Dataset {
    let mut dataset = Dataset::new(vec![
        row("Concepción", "Fundo Las Cruces", "concepcion_cruces", 95_000.0, 4_200.0),
        row("Talcahuano", "Fundo Las Cruces", "talcahuano_cruces", 42_000.0, 0.0),
        row("Coronel", "Fundo Las Cruces", "coronel_cruces", 28_000.0, 1_100.0),
        row("Los Ángeles", "Cemarc", "losangeles_cemarc", 55_000.0, 0.0),
        row("Cabrero", "Cemarc", "cabrero_cemarc", 8_500.0, 0.0),
        row("Arauco", "Copiulemu", "arauco_copiulemu", 12_500.0, 0.0),
    ]);

    dataset.set_municipality_coord("Concepción", GeoPoint::new(-73.05, -36.83));
    dataset.set_municipality_coord("Talcahuano", GeoPoint::new(-73.12, -36.72));
    dataset.set_municipality_coord("Coronel", GeoPoint::new(-73.13, -37.03));
    dataset.set_municipality_coord("Los Ángeles", GeoPoint::new(-72.35, -37.47));
    dataset.set_municipality_coord("Cabrero", GeoPoint::new(-72.40, -37.03));
    dataset.set_municipality_coord("Arauco", GeoPoint::new(-73.32, -37.25));

    dataset.set_landfill(
        "Fundo Las Cruces",
        GeoPoint::new(-72.78, -36.92),
        Color::rgb(0xE8, 0x6A, 0x5E),
    );
    dataset.set_landfill("Cemarc", GeoPoint::new(-72.55, -37.30), Color::rgb(0x6A, 0x9E, 0xE8));
    dataset.set_landfill(
        "Copiulemu",
        GeoPoint::new(-72.85, -36.95),
        Color::rgb(0xE8, 0xC8, 0x5E),
    );

    dataset.register_route(
        "concepcion_cruces",
        vec![
            GeoPoint::new(-73.05, -36.83),
            GeoPoint::new(-72.96, -36.85),
            GeoPoint::new(-72.88, -36.88),
            GeoPoint::new(-72.78, -36.92),
        ],
    );
    dataset.register_route(
        "talcahuano_cruces",
        vec![
            GeoPoint::new(-73.12, -36.72),
            GeoPoint::new(-73.00, -36.78),
            GeoPoint::new(-72.88, -36.86),
            GeoPoint::new(-72.78, -36.92),
        ],
    );
    dataset.register_route(
        "coronel_cruces",
        vec![
            GeoPoint::new(-73.13, -37.03),
            GeoPoint::new(-72.98, -36.99),
            GeoPoint::new(-72.78, -36.92),
        ],
    );
    dataset.register_route(
        "losangeles_cemarc",
        vec![
            GeoPoint::new(-72.35, -37.47),
            GeoPoint::new(-72.44, -37.40),
            GeoPoint::new(-72.55, -37.30),
        ],
    );
    // "cabrero_cemarc" and "arauco_copiulemu" stay unregistered: those rows
    // exercise the straight-line fallback.

    dataset
}
