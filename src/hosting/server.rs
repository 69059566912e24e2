use super::*;
use crate::gameroom::Fish;
use crate::gameroom::Lobby;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let lobby = Lobby::default();
        for i in 0..config.bots {
            lobby.add_bot(Fish::new(format!("fish{}", i))).await?;
        }
        let state = web::Data::new(lobby);
        log::info!("starting hosting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await?;
        Ok(())
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/enter/{name}", web::get().to(enter))
        .route("/start", web::post().to(start))
        .route("/bots/{name}", web::post().to(bot))
        .route("/snapshot", web::get().to(snapshot));
}

async fn start(lobby: web::Data<Lobby>) -> impl Responder {
    lobby.start().await;
    HttpResponse::Ok().json(serde_json::json!({ "status": "started" }))
}

async fn bot(lobby: web::Data<Lobby>, path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    match lobby.add_bot(Fish::new(name.as_str())).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "bot": name })),
        Err(e) => HttpResponse::Conflict().body(e.to_string()),
    }
}

async fn snapshot(lobby: web::Data<Lobby>) -> impl Responder {
    HttpResponse::Ok().json(lobby.snapshot().await)
}

async fn enter(
    lobby: web::Data<Lobby>,
    path: web::Path<String>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    let name = path.into_inner();
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            match bridge(lobby.get_ref().clone(), name, session, stream).await {
                Ok(()) => response.map_into_left_body(),
                Err(e) => HttpResponse::InternalServerError()
                    .body(e.to_string())
                    .map_into_right_body(),
            }
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Player;
    use crate::gameroom::Message;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use tokio::sync::mpsc::unbounded_channel;

    fn upgrade(uri: &str) -> test::TestRequest {
        test::TestRequest::get()
            .uri(uri)
            .insert_header(("upgrade", "websocket"))
            .insert_header(("connection", "upgrade"))
            .insert_header(("sec-websocket-version", "13"))
            .insert_header(("sec-websocket-key", "dGhlIHNhbXBsZSBub25jZQ=="))
    }

    #[actix_web::test]
    async fn refused_name_still_upgrades() {
        let lobby = Lobby::default();
        let (tx, _rx) = unbounded_channel::<Message>();
        assert!(lobby.join(Player::from("alice"), tx).await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lobby.clone()))
                .configure(routes),
        )
        .await;
        for uri in ["/enter/alice", "/enter/x=9,bob"] {
            let res = test::call_service(&app, upgrade(uri).to_request()).await;
            assert_eq!(res.status(), StatusCode::SWITCHING_PROTOCOLS);
        }
        assert_eq!(lobby.roster().await, vec!["alice"]);
    }

    #[actix_web::test]
    async fn bot_route_rejects_taken_names() {
        let lobby = Lobby::default();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(lobby.clone()))
                .configure(routes),
        )
        .await;
        let seat = || test::TestRequest::post().uri("/bots/fish").to_request();
        assert_eq!(test::call_service(&app, seat()).await.status(), StatusCode::OK);
        assert_eq!(test::call_service(&app, seat()).await.status(), StatusCode::CONFLICT);
        assert!(lobby.contains("fish").await);
    }
}
