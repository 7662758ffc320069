use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::{ctx::BaseParams, state::AppState, store::Note, Result};

use super::{CreateNote, DeleteNoteResponse, UpdateNote};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/notes", get(find_notes).post(create_note))
        .route(
            "/api/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .with_state(state)
}

async fn find_notes(BaseParams { ctx, db }: BaseParams) -> Json<Vec<Note>> {
    Json(db.list_notes(ctx.user_id()))
}

async fn get_note(
    Path(id): Path<i64>,
    BaseParams { ctx, db }: BaseParams,
) -> Result<Json<Note>> {
    db.get_note(id, ctx.user_id()).map(Json)
}

async fn create_note(
    BaseParams { ctx, db }: BaseParams,
    Json(args): Json<CreateNote>,
) -> Result<impl IntoResponse> {
    db.create_note(ctx.user_id(), &args.title, &args.content)
        .map(|note| (StatusCode::CREATED, Json(note)))
}

async fn update_note(
    Path(id): Path<i64>,
    BaseParams { ctx, db }: BaseParams,
    Json(args): Json<UpdateNote>,
) -> Result<Json<Note>> {
    db.update_note(id, ctx.user_id(), args.title, args.content)
        .map(Json)
}

async fn delete_note(
    Path(id): Path<i64>,
    BaseParams { ctx, db }: BaseParams,
) -> Result<Json<DeleteNoteResponse>> {
    db.delete_note(id, ctx.user_id())?;

    Ok(Json(DeleteNoteResponse {
        message: "Note deleted successfully".into(),
    }))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{store::Db, store::Note, Result};

    /// Registers a user and returns a bearer token for it.
    fn login(db: &Db, username: &str, email: &str) -> Result<String> {
        let user = db.register(username, email, "secret1")?;
        let user = db.find_by_email(&user.email).unwrap();
        crate::token::issue(&user)
    }

    fn test_server(db: Db) -> TestServer {
        crate::tests::test_server(db)
    }

    #[tokio::test]
    async fn requests_without_a_token_are_unauthorized() -> Result<()> {
        let server = test_server(Db::default());

        let response = server.get("/api/notes").await;

        assert_eq!(response.status_code(), 401);
        assert_eq!(
            response.json::<serde_json::Value>()["error"],
            "unauthorized"
        );
        Ok(())
    }

    #[tokio::test]
    async fn garbage_tokens_are_forbidden() -> Result<()> {
        let server = test_server(Db::default());

        let response = server
            .get("/api/notes")
            .authorization_bearer("not-a-real-token")
            .await;

        assert_eq!(response.status_code(), 403);
        Ok(())
    }

    #[tokio::test]
    async fn notes_are_scoped_to_the_token_owner() -> Result<()> {
        crate::tests::init_config();
        let db = Db::default();
        let alice = login(&db, "alice", "alice@x.com")?;
        let bob = login(&db, "bob", "bob@x.com")?;
        let server = test_server(db);

        let created = server
            .post("/api/notes")
            .authorization_bearer(&alice)
            .json(&json!({"title": "private", "content": "alice only"}))
            .await;
        assert_eq!(created.status_code(), 201);
        let note = created.json::<Note>();

        // invisible to bob, through every verb
        let path = format!("/api/notes/{}", note.id);
        let get = server
            .get(&path)
            .authorization_bearer(&bob)
            .await;
        let put = server
            .put(&path)
            .authorization_bearer(&bob)
            .json(&json!({"title": "hacked"}))
            .await;
        let delete = server
            .delete(&path)
            .authorization_bearer(&bob)
            .await;
        assert_eq!(get.status_code(), 404);
        assert_eq!(put.status_code(), 404);
        assert_eq!(delete.status_code(), 404);

        let bobs_notes = server.get("/api/notes").authorization_bearer(&bob).await;
        assert_eq!(bobs_notes.json::<Vec<Note>>().len(), 0);

        // still intact for alice
        let kept = server
            .get(&path)
            .authorization_bearer(&alice)
            .await;
        assert_eq!(kept.status_code(), 200);
        assert_eq!(kept.json::<Note>().title, "private");
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() -> Result<()> {
        crate::tests::init_config();
        let db = Db::default();
        let token = login(&db, "alice", "alice@x.com")?;
        let server = test_server(db);

        let response = server
            .post("/api/notes")
            .authorization_bearer(&token)
            .json(&json!({"title": "no content"}))
            .await;

        assert_eq!(response.status_code(), 400);
        Ok(())
    }

    #[tokio::test]
    async fn update_is_partial() -> Result<()> {
        crate::tests::init_config();
        let db = Db::default();
        let token = login(&db, "alice", "alice@x.com")?;
        let note = db.create_note(1, "title", "content")?;
        let server = test_server(db);

        let response = server
            .put(&format!("/api/notes/{}", note.id))
            .authorization_bearer(&token)
            .json(&json!({"content": "edited"}))
            .await;

        assert_eq!(response.status_code(), 200);
        let updated = response.json::<Note>();
        assert_eq!(updated.title, "title");
        assert_eq!(updated.content, "edited");
        Ok(())
    }

    #[tokio::test]
    async fn register_login_crud_flow() -> Result<()> {
        let server = test_server(Db::default());

        let registered = server
            .post("/api/auth/register")
            .json(&json!({"username": "alice", "email": "alice@x.com", "password": "secret1"}))
            .await;
        assert_eq!(registered.status_code(), 201);

        let login = server
            .post("/api/auth/login")
            .json(&json!({"email": "alice@x.com", "password": "secret1"}))
            .await;
        assert_eq!(login.status_code(), 200);
        let token = login.json::<crate::auth::LoginResponse>().token;

        let created = server
            .post("/api/notes")
            .authorization_bearer(&token)
            .json(&json!({"title": "T1", "content": "1234567890"}))
            .await;
        assert_eq!(created.status_code(), 201);
        let note = created.json::<Note>();
        assert_eq!(note.id, 1);
        assert_eq!(note.user_id, 1);

        let listed = server.get("/api/notes").authorization_bearer(&token).await;
        assert_eq!(listed.status_code(), 200);
        let notes = listed.json::<Vec<Note>>();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "T1");

        let deleted = server
            .delete("/api/notes/1")
            .authorization_bearer(&token)
            .await;
        assert_eq!(deleted.status_code(), 200);

        let gone = server.get("/api/notes/1").authorization_bearer(&token).await;
        assert_eq!(gone.status_code(), 404);
        Ok(())
    }
}
