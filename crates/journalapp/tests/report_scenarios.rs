use calamine::{Data, Reader, Xlsx};
use journalapp::api::JournalApi;
use journalapp::config::JournalConfig;
use journalapp::error::JournalError;
use journalapp::export::ExportFormat;
use journalapp::model::Field;
use journalapp::session::memory::MemorySessionStore;
use journalapp::session::{Role, ROLE_KEY};
use tempfile::TempDir;

fn setup(username: &str) -> JournalApi<MemorySessionStore> {
    let mut api = JournalApi::new(MemorySessionStore::new(), JournalConfig::default());
    api.login(username, username).unwrap();
    api
}

#[test]
fn test_cash_filter_sorted_by_debit_descending() {
    let mut api = setup("viewer");
    api.set_filter("Cash").unwrap();
    api.sort_by(Field::Debit).unwrap();
    let res = api.sort_by(Field::Debit).unwrap();

    let window = res.window.unwrap();
    assert_eq!(window.matched, 4);
    assert!(!window.sort.ascending);
    let debits: Vec<String> = window
        .rows
        .iter()
        .map(|row| row.entry.text(Field::Debit))
        .collect();
    assert_eq!(debits, vec!["1000", "1000", "50", ""]);
    assert!(window.rows.iter().all(|row| row.entry.account == "Cash"));
}

#[test]
fn test_edit_description_on_first_page() {
    let mut api = setup("admin");
    api.begin_edit(0).unwrap();
    api.update_edit(Field::Description, "X").unwrap();
    let res = api.commit_edit().unwrap();

    assert_eq!(res.affected_entries[0].date, "2025-01-01");
    assert_eq!(api.view().ledger().entries()[0].description, "X");
    assert!(api.view().editing().is_none());
}

#[test]
fn test_wrong_password_keeps_session() {
    let mut api = setup("viewer");
    let before = api.session_store().snapshot();

    let err = api.login("admin", "wrong").unwrap_err();
    assert!(matches!(err, JournalError::InvalidCredentials));
    assert_eq!(api.session_store().snapshot(), before);
    assert_eq!(api.role().unwrap(), Role::Viewer);

    api.login("staff", "staff").unwrap();
    assert_eq!(
        api.session_store().snapshot().get(ROLE_KEY).map(String::as_str),
        Some("staff")
    );
}

#[test]
fn test_sort_change_discards_edit() {
    let mut api = setup("admin");
    api.begin_edit(0).unwrap();
    api.update_edit(Field::Account, "Petty Cash").unwrap();

    // Re-sorting drops the pending edit rather than applying it elsewhere.
    api.sort_by(Field::Account).unwrap();
    assert!(matches!(
        api.commit_edit(),
        Err(JournalError::NoEditInProgress)
    ));
    assert!(api
        .view()
        .ledger()
        .entries()
        .iter()
        .all(|e| e.account != "Petty Cash"));
}

#[test]
fn test_delete_on_second_page() {
    let mut api = setup("staff");
    api.change_page(2).unwrap();
    let res = api.delete_row(1).unwrap();

    assert_eq!(res.affected_entries[0].date, "2025-01-07");
    assert_eq!(api.view().ledger().len(), 9);
    let window = res.window.unwrap();
    assert_eq!(window.page, 2);
    assert_eq!(window.rows.len(), 4);
}

#[test]
fn test_invalid_amount_keeps_edit_open() {
    let mut api = setup("staff");
    api.begin_edit(2).unwrap();
    api.update_edit(Field::Credit, "lots").unwrap();

    assert!(matches!(
        api.commit_edit(),
        Err(JournalError::InvalidAmount {
            field: Field::Credit,
            ..
        })
    ));
    assert!(api.view().editing().is_some());
    assert_eq!(
        api.view().ledger().entries()[2].text(Field::Credit),
        "200"
    );
}

#[test]
fn test_export_ignores_filter() {
    let temp = TempDir::new().unwrap();
    let mut api = setup("admin");
    api.set_filter("Revenue").unwrap();

    let res = api.export(ExportFormat::Pdf, temp.path()).unwrap();
    let bytes = std::fs::read(&res.artifacts[0]).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("(Initial balance)"));
    assert!(text.contains("(Extra Service)"));
}

#[test]
fn test_spreadsheet_reflects_edit_and_delete() {
    let temp = TempDir::new().unwrap();
    let mut api = setup("admin");

    api.begin_edit(0).unwrap();
    api.update_edit(Field::Description, "Opening balance").unwrap();
    api.update_edit(Field::Debit, "1250.5").unwrap();
    api.commit_edit().unwrap();
    api.change_page(2).unwrap();
    api.delete_row(1).unwrap();

    let res = api.export(ExportFormat::Xlsx, temp.path()).unwrap();
    let mut workbook: Xlsx<_> = calamine::open_workbook(&res.artifacts[0]).unwrap();
    let range = workbook.worksheet_range("Journal Report").unwrap();

    assert_eq!(range.height(), 10);
    assert_eq!(
        range.get_value((1, 2)),
        Some(&Data::String("Opening balance".to_string()))
    );
    assert_eq!(range.get_value((1, 3)), Some(&Data::Float(1250.5)));
    let dates: Vec<String> = range
        .rows()
        .skip(1)
        .map(|row| row[0].to_string())
        .collect();
    assert_eq!(dates.len(), 9);
    assert!(!dates.iter().any(|date| date == "2025-01-07"));
    assert!(!range
        .rows()
        .any(|row| row[2] == Data::String("Initial balance".to_string())));
}

#[test]
fn test_capabilities_per_role() {
    let temp = TempDir::new().unwrap();

    let mut viewer = setup("viewer");
    assert!(viewer.set_filter("Bank").is_ok());
    assert!(viewer.export(ExportFormat::Xlsx, temp.path()).is_ok());
    assert!(viewer.begin_edit(0).is_err());
    assert!(viewer.delete_row(0).is_err());

    let mut staff = setup("staff");
    assert!(staff.show().is_ok());
    assert!(staff.set_filter("Bank").is_err());
    assert!(staff.export(ExportFormat::Xlsx, temp.path()).is_err());
    assert!(staff.delete_row(0).is_ok());

    let mut admin = setup("admin");
    assert!(admin.set_filter("Bank").is_ok());
    assert!(admin.begin_edit(0).is_ok());
    assert!(admin.export(ExportFormat::Pdf, temp.path()).is_ok());
}
