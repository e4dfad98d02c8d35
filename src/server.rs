use computer_club::{load, run, DayReport};
use failure::Error;
use rocket_contrib::json::Json;
use serde::Serialize;
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum RunResponse {
    Report(DayReport),
    CorruptedLine(String),
}

/// Body is the input file as is
#[post("/run", format = "text/plain", data = "<input>")]
fn server_run(input: String) -> Json<RunResponse> {
    let response = match load(&input) {
        Ok(loaded) => RunResponse::Report(run(loaded.config, loaded.actions)),
        Err(error) => {
            info!(%error, "input rejected");
            RunResponse::CorruptedLine(error.line)
        }
    };

    Json(response)
}

pub fn run_server() -> Result<(), Error> {
    let cors = rocket_cors::CorsOptions::default().to_cors()?;

    let error = rocket::ignite()
        .attach(cors)
        .mount("/", routes![server_run])
        .launch();

    Err(failure::err_msg(error.to_string()))
}
