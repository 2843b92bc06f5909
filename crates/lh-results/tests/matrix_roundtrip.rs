use std::path::PathBuf;

use lh_core::Transfers;
use lh_network::parse_listing;
use lh_results::*;
use lh_transfer::{ClosureStrategy, TransferEngine};

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("lh_results_test");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn written_matrix_reads_back_identically() {
    let net = parse_listing(
        "4 Red 3 \"Old Bank,East Pier Blue 2 Pier Airport Green 2 Depot Yard Loop 0",
    )
    .unwrap();
    let out = TransferEngine::new(ClosureStrategy::Parallel)
        .run(&net)
        .unwrap();

    let writer = MatrixWriter::new(',', UnreachableMarker::Text("n/a".into())).unwrap();
    let path = temp_path("roundtrip.csv");
    writer.write_file(&path, &net, &out.stations).unwrap();

    let table = TransferTable::read_file(&path, ',', writer.unreachable()).unwrap();
    let names: Vec<_> = net.stations().iter().map(|s| s.name.clone()).collect();
    assert_eq!(table.stations(), names.as_slice());

    for from in net.stations() {
        for to in net.stations() {
            assert_eq!(
                table.lookup(&from.name, &to.name),
                Some(out.stations.transfers(from.id, to.id)),
                "{} -> {}",
                from.name,
                to.name
            );
        }
    }

    assert_eq!(
        table.lookup("\"Old", "Airport"),
        Some(Transfers::Reachable(1))
    );
    assert_eq!(table.lookup("Depot", "Pier"), Some(Transfers::Unreachable));
}

#[test]
fn reading_missing_file_is_io_error() {
    let err = TransferTable::read_file(
        &temp_path("does_not_exist.csv"),
        ',',
        &UnreachableMarker::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ResultsError::Io(_)));
}

#[test]
fn empty_network_round_trips() {
    let net = parse_listing("1 Ghost 0").unwrap();
    let out = TransferEngine::new(ClosureStrategy::Sequential)
        .run(&net)
        .unwrap();
    assert_eq!(net.station_count(), 0);

    let writer = MatrixWriter::default();
    let rendered = writer.render(&net, &out.stations).unwrap();
    let table = TransferTable::parse(&rendered, ',', writer.unreachable()).unwrap();
    assert!(table.stations().is_empty());
    assert_eq!(table.lookup("Ghost", "Ghost"), None);

    let path = temp_path("empty.csv");
    writer.write_file(&path, &net, &out.stations).unwrap();
    let table = TransferTable::read_file(&path, ',', writer.unreachable()).unwrap();
    assert!(table.stations().is_empty());
}

#[test]
fn semicolon_table_with_quoted_names_round_trips() {
    let net = parse_listing("2 North 2 A;1 Hub South 2 Hub B;2").unwrap();
    let out = TransferEngine::new(ClosureStrategy::Sequential)
        .run(&net)
        .unwrap();

    let writer = MatrixWriter::new(';', UnreachableMarker::default()).unwrap();
    let rendered = writer.render(&net, &out.stations).unwrap();
    assert!(rendered.starts_with(";\"A;1\";Hub;\"B;2\"\n"));

    let table = TransferTable::parse(&rendered, ';', writer.unreachable()).unwrap();
    assert_eq!(table.lookup("A;1", "B;2"), Some(Transfers::Reachable(1)));
}
