//! Database schema and migrations.
//!
//! Migrations are applied in order; `schema_version` records which ones ran.

/// Database migrations.
pub const MIGRATIONS: &[&str] = &[
    // v1: accounts
    r#"
CREATE TABLE accounts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    email       TEXT NOT NULL UNIQUE CHECK (length(email) > 0),
    password    TEXT NOT NULL,                                 -- Argon2 hash
    nickname    TEXT NOT NULL UNIQUE CHECK (length(nickname) > 0),
    university  TEXT NOT NULL DEFAULT '',
    student_id  TEXT NOT NULL DEFAULT '',
    status      TEXT NOT NULL DEFAULT 'REGISTERED'
                CHECK (status IN ('REGISTERED', 'UNREGISTERED')),
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_accounts_status ON accounts(status);
"#,
    // v2: boards owned by an account
    r#"
CREATE TABLE boards (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id          INTEGER NOT NULL REFERENCES accounts(id),
    board_name          TEXT NOT NULL CHECK (length(board_name) > 0),
    board_description   TEXT NOT NULL DEFAULT '',
    board_notice        TEXT NOT NULL DEFAULT '',
    created_at          TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at          TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_boards_account_id ON boards(account_id);
"#,
    // v3: posts
    r#"
CREATE TABLE posts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    account_id  INTEGER NOT NULL REFERENCES accounts(id),
    board_id    INTEGER NOT NULL REFERENCES boards(id) ON DELETE CASCADE,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    writer_open TEXT NOT NULL DEFAULT 'PUBLIC' CHECK (writer_open IN ('PUBLIC', 'PRIVATE')),
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_posts_board_id ON posts(board_id);
CREATE INDEX idx_posts_account_id ON posts(account_id);
"#,
    // v4: comments, removed with their post
    r#"
CREATE TABLE comments (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id     INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    account_id  INTEGER NOT NULL REFERENCES accounts(id),
    content     TEXT NOT NULL,
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_comments_post_id ON comments(post_id);
CREATE INDEX idx_comments_account_id ON comments(account_id);
"#,
    // v5: post hearts, one per (writer, post)
    r#"
CREATE TABLE post_hearts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id     INTEGER NOT NULL REFERENCES posts(id) ON DELETE CASCADE,
    writer_id   INTEGER NOT NULL REFERENCES accounts(id),
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE (writer_id, post_id)
);

CREATE INDEX idx_post_hearts_post_id ON post_hearts(post_id);
"#,
];
