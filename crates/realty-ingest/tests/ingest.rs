use std::io::Write;

use realty_ingest::{read_economic_csv, read_listings_csv};

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn listings_csv_loads_with_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "listings.csv",
        "region,city,floor,osm_amenity_points_in_0.001\n\
         Москва,Москва,3,12\n\
         Татарстан,Казань,подвал,0\n",
    );

    let df = read_listings_csv(&path).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 4);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert!(names.contains(&"floor".to_string()));
}

#[test]
fn economic_csv_loads_and_is_keyed_by_region() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "econ.csv",
        "region,avg_salary,population,grp\n\
         Москва,95000,12655050,17800000\n\
         Санкт-Петербург,65000,5384342,\n",
    );

    let table = read_economic_csv(&path).unwrap();
    assert_eq!(table.len(), 2);
    let moscow = table.get("МОСКВА").unwrap();
    assert_eq!(moscow.avg_salary, Some(95_000.0));
    assert_eq!(moscow.population, Some(12_655_050));
    let spb = table.get("Санкт-Петербург").unwrap();
    assert_eq!(spb.grp, None);
}

#[test]
fn economic_csv_tolerates_malformed_cells_and_extra_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "econ.csv",
        "region,avg_salary,population,grp,source\n\
         Москва,n/a,not-a-number,1.5,rosstat\n\
         ,50000,1,2\n",
    );

    let table = read_economic_csv(&path).unwrap();
    // The empty-region row is skipped entirely.
    assert_eq!(table.len(), 1);
    let moscow = table.get("Москва").unwrap();
    assert_eq!(moscow.avg_salary, None);
    assert_eq!(moscow.population, None);
    assert_eq!(moscow.grp, Some(1.5));
}

#[test]
fn economic_csv_requires_region_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "econ.csv", "avg_salary,population\n100,200\n");
    assert!(read_economic_csv(&path).is_err());
}
