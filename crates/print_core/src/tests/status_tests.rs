use super::{RunId, Status, StatusReport};

#[test]
fn sequence_walks_the_four_phases_in_order() {
    let mut walked = vec![Status::first()];
    while let Some(next) = walked.last().and_then(|status| status.next()) {
        walked.push(next);
    }
    assert_eq!(walked, Status::SEQUENCE.to_vec());
    assert_eq!(Status::OrderCompleted.next(), None);
}

#[test]
fn labels_match_kiosk_text() {
    let labels: Vec<_> = Status::SEQUENCE.iter().map(|status| status.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Fetching Data...",
            "Printing...",
            "Printing Complete. Please collect your print!",
            "Order Completed!",
        ]
    );
    assert_eq!(Status::Printing.to_string(), "Printing...");
}

#[test]
fn report_serializes_with_snake_case_status() {
    let report = StatusReport::now(RunId(7), Status::PrintingComplete);
    let value = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(value["run"], 7);
    assert_eq!(value["status"], "printing_complete");
    assert_eq!(RunId(7).to_string(), "run-7");
}
