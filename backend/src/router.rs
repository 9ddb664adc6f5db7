use std::convert::Infallible;
use std::fmt;

use log::info;
use rocket::request::{self, FromRequest};
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, routes, FromForm, Request, Route, State};

use crate::errors::ApiError;
use crate::sim_db::SimDb;
use crate::structs::{NewNote, Note, NotePatch, NotePayload, NoteVector};

pub fn routes() -> Vec<Route> {
    routes![create_note, list_notes, get_note, update_note, delete_note]
}

/// Authority used to build absolute `Location` URLs: the request's `Host`
/// header, or the address Rocket is bound to.
pub struct RequestHost(String);

impl fmt::Display for RequestHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for RequestHost {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let host = match request.headers().get_one("Host") {
            Some(host) => host.to_string(),
            None => {
                let config = request.rocket().config();
                format!("{}:{}", config.address, config.port)
            }
        };
        request::Outcome::Success(RequestHost(host))
    }
}

#[derive(FromForm, Debug, Default)]
pub struct Search {
    #[field(name = "searchTerm")]
    search_term: Option<String>,
}

// Ids that are not integers can never match a stored note.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

// A body that is missing or not a JSON object carries no title.
fn payload_or_default(payload: Option<Json<NotePayload>>) -> NotePayload {
    payload.map(Json::into_inner).unwrap_or_default()
}

fn require_title(title: Option<String>) -> Result<String, ApiError> {
    match title {
        Some(title) if !title.is_empty() => Ok(title),
        _ => Err(ApiError::MissingTitle),
    }
}

// Routes //////////////////////////////////////////////////////////////////////////////////////////

#[post("/notes", data = "<payload>")]
async fn create_note(
    db: &State<SimDb>,
    host: RequestHost,
    payload: Option<Json<NotePayload>>,
) -> Result<status::Created<Json<Note>>, ApiError> {
    let payload = payload_or_default(payload);
    let new_note = NewNote {
        title: require_title(payload.title)?,
        content: payload.content.unwrap_or_default(),
    };

    let note = db.create(new_note).await?;
    info!("created note {}", note.id);

    let location = format!("http://{}/api/notes/{}", host, note.id);
    Ok(status::Created::new(location).body(Json(note)))
}

#[get("/notes?<search..>")]
async fn list_notes(db: &State<SimDb>, search: Search) -> Result<Json<NoteVector>, ApiError> {
    let list = db.filter(search.search_term.as_deref()).await?;
    Ok(Json(list))
}

#[get("/notes/<id>")]
async fn get_note(db: &State<SimDb>, id: &str) -> Result<Option<Json<Note>>, ApiError> {
    let id = match parse_id(id) {
        Some(id) => id,
        None => return Ok(None),
    };

    Ok(db.find(id).await?.map(Json))
}

#[put("/notes/<id>", data = "<payload>")]
async fn update_note(
    db: &State<SimDb>,
    id: &str,
    payload: Option<Json<NotePayload>>,
) -> Result<Option<Json<Note>>, ApiError> {
    let payload = payload_or_default(payload);
    let patch = NotePatch {
        title: Some(require_title(payload.title)?),
        content: payload.content,
    };

    let id = match parse_id(id) {
        Some(id) => id,
        None => return Ok(None),
    };

    Ok(db.update(id, patch).await?.map(Json))
}

#[delete("/notes/<id>")]
async fn delete_note(db: &State<SimDb>, id: &str) -> Result<status::NoContent, ApiError> {
    if let Some(id) = parse_id(id) {
        if db.delete(id).await? {
            info!("deleted note {}", id);
        }
    }

    Ok(status::NoContent)
}
