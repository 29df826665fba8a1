use ledgercheck_recon::model::LoadedCounts;
use ledgercheck_recon::{compare_tables, Cell, Observation, Table};

/// Balance export: 7 header rows, then id | name | .. | .. | .. | balance.
fn balance_table(rows: &[(&str, &str, Cell)]) -> Table {
    let mut cells: Vec<Vec<Cell>> = Vec::new();
    cells.push(vec![Cell::Text("Balance de sumas y saldos".into())]);
    for _ in 1..6 {
        cells.push(Vec::new());
    }
    cells.push(
        ["Cuenta", "Nombre", "Debe", "Haber", "Saldo ant.", "Saldo"]
            .iter()
            .map(|h| Cell::Text(h.to_string()))
            .collect(),
    );
    for (id, name, amount) in rows {
        cells.push(vec![
            Cell::Text(id.to_string()),
            Cell::Text(name.to_string()),
            Cell::Number(0.0),
            Cell::Number(0.0),
            Cell::Number(0.0),
            amount.clone(),
        ]);
    }
    Table::new(cells)
}

/// DDP export: 2 header rows, then .. | name | provider number | amount.
fn ddp_table(rows: &[(&str, &str, Cell)]) -> Table {
    let mut cells: Vec<Vec<Cell>> = vec![
        vec![Cell::Text("Pagos DDP".into())],
        ["Fecha", "Proveedor", "Numero", "Importe"]
            .iter()
            .map(|h| Cell::Text(h.to_string()))
            .collect(),
    ];
    for (name, number, amount) in rows {
        cells.push(vec![
            Cell::Text("2026-01-31".into()),
            Cell::Text(name.to_string()),
            Cell::Text(number.to_string()),
            amount.clone(),
        ]);
    }
    Table::new(cells)
}

#[test]
fn realistic_month_end() {
    let balance = balance_table(&[
        ("400002500", "ACME SUMINISTROS", Cell::Number(-1500.0)),
        ("400001001", "", Cell::Text("-200".into())),
        ("400007777", "SOLO BALANCE", Cell::Number(-80.0)),
        ("400001042", "BETA", Cell::Text("-1,000.00".into())),
        ("400002500", "ACME DUPLICATE", Cell::Number(-9999.0)),
        ("", "Total", Cell::Number(-12779.0)),
    ]);
    let ddp = ddp_table(&[
        ("Acme", "2500", Cell::Number(1000.0)),
        ("", "2500", Cell::Number(500.0)),
        ("Sin proveedor", "0", Cell::Number(150.0)),
        ("Beta SL", "98760042", Cell::Number(1000.0)),
        ("Solo DDP", "3333", Cell::Text("12.5".into())),
    ]);

    let result = compare_tables(&balance, &ddp).unwrap();

    let ids: Vec<_> = result.matches.iter().map(|m| m.provider_id.as_str()).collect();
    assert_eq!(ids, ["400001001", "400001042", "400002500"]);

    let reserved = &result.matches[0];
    assert_eq!(reserved.provider_name, "Sin proveedor");
    assert_eq!(reserved.difference, -50.0);
    assert_eq!(reserved.observation, Observation::ExcessInBalance);

    let beta = &result.matches[1];
    assert_eq!(beta.provider_name, "BETA");
    assert_eq!(beta.observation, Observation::Balanced);

    let acme = &result.matches[2];
    assert_eq!(acme.provider_name, "ACME SUMINISTROS");
    assert_eq!(acme.balance_amount, -1500.0);
    assert_eq!(acme.ddp_amount, 1500.0);
    assert_eq!(acme.observation, Observation::Balanced);

    assert_eq!(result.differences.len(), 1);
    assert_eq!(result.differences[0].provider_id, "400001001");

    assert!(result.only_in_balance.is_empty());
    assert!(result.only_in_ddp.is_empty());

    // Totals include one-sided providers; the duplicate Balance row does not count.
    assert_eq!(result.totals.balance, -1500.0 - 200.0 - 80.0 - 1000.0);
    assert_eq!(result.totals.ddp, 1500.0 + 150.0 + 1000.0 + 12.5);
    assert_eq!(result.loaded, LoadedCounts { balance: 4, ddp: 4 });

    let summary = result.summary();
    assert_eq!(summary.matched, 3);
    assert_eq!(summary.with_differences, 1);
    assert_eq!(summary.unmatched_balance, 1);
    assert_eq!(summary.unmatched_ddp, 1);
}

#[test]
fn classification_boundaries() {
    let balance = balance_table(&[
        ("400001001", "exact", Cell::Number(-100.0)),
        ("400001002", "tiny", Cell::Number(-100.0001)),
        ("400001003", "over", Cell::Number(-100.0)),
    ]);
    let ddp = ddp_table(&[
        ("", "1001", Cell::Number(100.0)),
        ("", "1002", Cell::Number(100.0)),
        ("", "1003", Cell::Number(150.0)),
    ]);

    let result = compare_tables(&balance, &ddp).unwrap();
    let labels: Vec<_> = result.matches.iter().map(|m| m.observation).collect();
    assert_eq!(
        labels,
        [Observation::Balanced, Observation::ExcessInBalance, Observation::ExcessInDdp]
    );
    assert_eq!(result.differences.len(), 1);
    assert_eq!(result.differences[0].provider_name, "over");
    assert_eq!(result.differences[0].difference, 50.0);
}

#[test]
fn result_serializes_for_presentation() {
    let balance = balance_table(&[("400001234", "Acme", Cell::Number(-10.0))]);
    let ddp = ddp_table(&[("Acme", "1234", Cell::Number(12.0))]);
    let result = compare_tables(&balance, &ddp).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["matches"][0]["provider_id"], "400001234");
    assert_eq!(json["matches"][0]["observation"], "excess_in_ddp");
    assert_eq!(json["differences"].as_array().unwrap().len(), 1);
    assert_eq!(json["only_in_balance"].as_array().unwrap().len(), 0);
    assert_eq!(json["totals"]["ddp"], 12.0);
    assert!(json.get("loaded").is_none());
}

#[test]
fn swapped_files_fail_ingestion() {
    let balance = balance_table(&[("400001234", "Acme", Cell::Number(-10.0))]);
    let payments: Vec<_> = (1..=8)
        .map(|i| ("Acme", "1234", Cell::Number(i as f64)))
        .collect();
    let ddp = ddp_table(&payments);

    let err = compare_tables(&ddp, &balance).unwrap_err();
    assert!(err.to_string().starts_with("Balance file: missing"), "{err}");
}
