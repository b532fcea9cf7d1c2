use anyhow::Context;
use sqlx::SqlitePool;

use super::models::Book;

const BOOK_COLUMNS: &str = "Isbn, Title, Author, ShortDescription, PageCount, ReleaseDate";

/// Repository for the `Books` table. Each operation checks a connection out
/// of the pool for a single statement; "not found" and "duplicate" are
/// ordinary `None`/`false` results, never errors. Driver failures propagate
/// to the caller with operation context.
#[derive(Clone)]
pub struct BookService {
    pool: SqlitePool,
}

impl BookService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new book. Returns `false` when a book with the same ISBN
    /// already exists or the insert affected no rows.
    pub async fn create(&self, book: &Book) -> anyhow::Result<bool> {
        if self.get_by_isbn(&book.isbn).await?.is_some() {
            return Ok(false);
        }

        let result = sqlx::query(
            "INSERT INTO Books (Isbn, Title, Author, ShortDescription, PageCount, ReleaseDate) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.short_description)
        .bind(book.page_count)
        .bind(book.release_date)
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to insert book '{}'", book.isbn))?;

        Ok(result.rows_affected() > 0)
    }

    /// Single-row lookup by primary key.
    pub async fn get_by_isbn(&self, isbn: &str) -> anyhow::Result<Option<Book>> {
        sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM Books WHERE Isbn = ?"
        ))
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("failed to look up book '{isbn}'"))
    }

    /// Full-table scan; row order is whatever the store returns.
    pub async fn get_all(&self) -> anyhow::Result<Vec<Book>> {
        sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM Books"))
            .fetch_all(&self.pool)
            .await
            .context("failed to list books")
    }

    /// Substring match anywhere in the title.
    pub async fn search_by_title(&self, search_term: &str) -> anyhow::Result<Vec<Book>> {
        sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM Books WHERE Title LIKE ?"
        ))
        .bind(format!("%{search_term}%"))
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("failed to search books by title '{search_term}'"))
    }

    /// Overwrite all non-key fields of an existing book. Returns `false`
    /// when no row exists for the ISBN.
    pub async fn update(&self, book: &Book) -> anyhow::Result<bool> {
        if self.get_by_isbn(&book.isbn).await?.is_none() {
            return Ok(false);
        }

        let result = sqlx::query(
            "UPDATE Books SET Title = ?, Author = ?, ShortDescription = ?, \
             PageCount = ?, ReleaseDate = ? WHERE Isbn = ?",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.short_description)
        .bind(book.page_count)
        .bind(book.release_date)
        .bind(&book.isbn)
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to update book '{}'", book.isbn))?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove a row by primary key. Returns `false` when nothing was removed.
    pub async fn delete(&self, isbn: &str) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM Books WHERE Isbn = ?")
            .bind(isbn)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete book '{isbn}'"))?;

        Ok(result.rows_affected() > 0)
    }
}
