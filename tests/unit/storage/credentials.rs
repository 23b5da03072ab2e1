//! Tests for the SQLite credential table

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use rusqlite::Connection;
    use stripkey::ErrorKind;
    use stripkey::spatial::Strip;
    use stripkey::storage::CredentialStore;

    fn strips(value: u8, count: usize) -> Vec<Strip> {
        (0..count)
            .map(|i| Strip::new(Array3::from_elem((4, 3, 3), value.wrapping_add(i as u8))))
            .collect()
    }

    // Tests get returns exactly what put stored
    // Verified by dropping the last strip on write
    #[test]
    fn test_put_then_get() {
        let store = CredentialStore::open_in_memory().unwrap();
        let original = strips(10, 4);

        store.put("alice", &original).unwrap();

        assert_eq!(store.get("alice").unwrap(), original);
        assert!(store.contains("alice").unwrap());
        assert!(store.path().is_none());
    }

    // Tests put overwrites instead of appending
    // Verified by using plain INSERT
    #[test]
    fn test_put_is_upsert() {
        let store = CredentialStore::open_in_memory().unwrap();

        store.put("alice", &strips(10, 4)).unwrap();
        store.put("alice", &strips(200, 2)).unwrap();

        assert_eq!(store.get("alice").unwrap(), strips(200, 2));
    }

    // Tests unknown usernames are NotFound
    // Verified by returning an empty strip list
    #[test]
    fn test_get_unknown_user() {
        let store = CredentialStore::open_in_memory().unwrap();

        let err = store.get("bob").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!store.contains("bob").unwrap());
    }

    // Tests empty and mixed-shape strip sequences are rejected
    // Verified by removing the shape check
    #[test]
    fn test_put_validates_strips() {
        let store = CredentialStore::open_in_memory().unwrap();

        let err = store.put("alice", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let mut mixed = strips(0, 2);
        mixed.push(Strip::new(Array3::zeros((4, 2, 3))));
        let err = store.put("alice", &mixed).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        assert!(!store.contains("alice").unwrap());
    }

    // Tests blank usernames are rejected
    // Verified by removing username validation
    #[test]
    fn test_blank_username() {
        let store = CredentialStore::open_in_memory().unwrap();

        let err = store.put("", &strips(0, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(store.get(" ").is_err());
    }

    // Tests credentials persist across reopen and parent directories are created
    // Verified by opening an in-memory database for file paths
    #[test]
    fn test_persists_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state/users.db");

        {
            let store = CredentialStore::open(&path).unwrap();
            store.put("alice", &strips(5, 4)).unwrap();
            assert_eq!(store.path(), Some(path.as_path()));
        }

        let reopened = CredentialStore::open(&path).unwrap();
        assert_eq!(reopened.get("alice").unwrap(), strips(5, 4));
    }

    // Tests the table layout is one row per username with a blob column
    // Verified by renaming the blob column
    #[test]
    fn test_table_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.db");

        let store = CredentialStore::open(&path).unwrap();
        store.put("alice", &strips(1, 4)).unwrap();
        store.put("alice", &strips(2, 4)).unwrap();
        store.put("carol", &strips(3, 4)).unwrap();
        drop(store);

        let conn = Connection::open(&path).unwrap();
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 2);

        let kind: String = conn
            .query_row(
                "SELECT typeof(password_segments) FROM users WHERE username = 'alice'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(kind, "blob");
    }

    // Tests a corrupt blob surfaces as a storage error
    // Verified by returning an empty strip list for undecodable rows
    #[test]
    fn test_corrupt_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.db");
        drop(CredentialStore::open(&path).unwrap());

        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO users (username, password_segments) VALUES ('mallory', x'00ff')",
            [],
        )
        .unwrap();
        drop(conn);

        let store = CredentialStore::open(&path).unwrap();
        let err = store.get("mallory").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }
}
