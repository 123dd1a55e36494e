use actix_web::{guard, web};
use startlabx_api::{
  admin::{list_users::admin_list_users, update_user::admin_update_user},
  ai::{
    legal_doc::generate_legal_doc,
    list_generations::list_generations,
    market_analysis::generate_market_analysis,
    pitch_deck::generate_pitch_deck,
  },
  community::join::toggle_join_community,
  notification::{
    list::list_notifications,
    mark_all_read::mark_all_read,
    unread_count::unread_count,
  },
  post::{like::toggle_like_post, save::toggle_save_post},
  subscription::{get::get_subscription, subscribe::subscribe},
  talent::list::list_talent,
  user::{
    login::login,
    password_change::password_change,
    password_reset::password_reset,
    save_settings::save_user_settings,
  },
};
use startlabx_api_crud::{
  comment::{create::create_comment, list::list_comments},
  community::{create::create_community, list::list_communities, read::get_community},
  message::{conversations::list_conversations, create::send_message, list::list_messages},
  opportunity::{
    create::create_opportunity,
    list::list_opportunities,
    update::update_opportunity,
  },
  post::{
    create::create_post,
    delete::delete_post,
    read::{get_post, list_posts},
  },
  startup::{
    create::create_startup,
    read::{get_startup, list_startups},
    update::update_startup,
  },
  user::create::register,
};
use startlabx_utils::rate_limit::RateLimitCell;

pub fn config(cfg: &mut web::ServiceConfig, rate_limit: &RateLimitCell) {
  cfg.service(
    web::scope("/api/v1")
      .service(
        web::scope("/auth")
          .wrap(rate_limit.register())
          .route("/register", web::post().to(register))
          .route("/login", web::post().to(login))
          .route("/password_reset", web::post().to(password_reset))
          .route("/password_change", web::post().to(password_change)),
      )
      .service(
        web::scope("/user")
          .wrap(rate_limit.message())
          .route("/settings", web::put().to(save_user_settings)),
      )
      // Creation gets the stricter limiter, everything else under /post
      // the general one.
      .service(
        web::resource("/post")
          .guard(guard::Post())
          .wrap(rate_limit.post())
          .route(web::post().to(create_post)),
      )
      .service(
        web::scope("/post")
          .wrap(rate_limit.message())
          .route("", web::get().to(get_post))
          .route("/list", web::get().to(list_posts))
          .route("/delete", web::post().to(delete_post))
          .route("/like", web::post().to(toggle_like_post))
          .route("/save", web::put().to(toggle_save_post)),
      )
      .service(
        web::resource("/comment")
          .guard(guard::Post())
          .wrap(rate_limit.post())
          .route(web::post().to(create_comment)),
      )
      .service(
        web::scope("/comment")
          .wrap(rate_limit.message())
          .route("/list", web::get().to(list_comments)),
      )
      .service(
        web::resource("/community")
          .guard(guard::Post())
          .wrap(rate_limit.post())
          .route(web::post().to(create_community)),
      )
      .service(
        web::scope("/community")
          .wrap(rate_limit.message())
          .route("", web::get().to(get_community))
          .route("/list", web::get().to(list_communities))
          .route("/join", web::post().to(toggle_join_community)),
      )
      .service(
        web::resource("/startup")
          .guard(guard::Post())
          .wrap(rate_limit.post())
          .route(web::post().to(create_startup)),
      )
      .service(
        web::scope("/startup")
          .wrap(rate_limit.message())
          .route("", web::get().to(get_startup))
          .route("", web::put().to(update_startup))
          .route("/list", web::get().to(list_startups)),
      )
      .service(
        web::resource("/opportunity")
          .guard(guard::Post())
          .wrap(rate_limit.post())
          .route(web::post().to(create_opportunity)),
      )
      .service(
        web::scope("/opportunity")
          .wrap(rate_limit.message())
          .route("", web::put().to(update_opportunity))
          .route("/list", web::get().to(list_opportunities)),
      )
      .service(
        web::scope("/talent")
          .wrap(rate_limit.search())
          .route("", web::get().to(list_talent)),
      )
      .service(
        web::resource("/message")
          .guard(guard::Post())
          .wrap(rate_limit.message())
          .route(web::post().to(send_message)),
      )
      .service(
        web::scope("/message")
          .wrap(rate_limit.message())
          .route("/list", web::get().to(list_messages)),
      )
      .service(
        web::scope("/conversation")
          .wrap(rate_limit.message())
          .route("/list", web::get().to(list_conversations)),
      )
      .service(
        web::scope("/notification")
          .wrap(rate_limit.message())
          .route("/list", web::get().to(list_notifications))
          .route("/unread_count", web::get().to(unread_count))
          .route("/mark_all_read", web::post().to(mark_all_read)),
      )
      .service(
        web::scope("/subscription")
          .wrap(rate_limit.message())
          .route("", web::get().to(get_subscription))
          .route("/subscribe", web::post().to(subscribe)),
      )
      .service(
        web::scope("/ai")
          .wrap(rate_limit.ai())
          .route("/pitch_deck", web::post().to(generate_pitch_deck))
          .route("/legal_doc", web::post().to(generate_legal_doc))
          .route("/market_analysis", web::post().to(generate_market_analysis))
          .route("/generations", web::get().to(list_generations)),
      )
      .service(
        web::scope("/admin")
          .wrap(rate_limit.message())
          .route("/users", web::get().to(admin_list_users))
          .route("/users", web::patch().to(admin_update_user)),
      ),
  );
}
