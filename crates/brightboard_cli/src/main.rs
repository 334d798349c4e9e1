//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `brightboard_core` wiring.
//! - Run one CRUD pass per entity against an in-memory database so the
//!   persistence stack can be sanity-checked without an API layer.

use brightboard_core::model::account::ROLE_ADMIN;
use brightboard_core::{
    Account, AccountService, ConnectionProvider, ContactMessage, ContactMessageService,
    ImageClient, Post, PostService, Task, TaskService,
};

fn main() {
    println!("brightboard_core ping={}", brightboard_core::ping());
    println!("brightboard_core version={}", brightboard_core::core_version());

    let provider = match ConnectionProvider::in_memory() {
        Ok(provider) => provider,
        Err(err) => {
            eprintln!("failed to open database: {err}");
            return;
        }
    };

    let accounts = AccountService::new(&provider);
    let posts = PostService::new(&provider, ImageClient::from_env());
    let tasks = TaskService::new(&provider);
    let messages = ContactMessageService::new(&provider);

    let Some(account) = accounts.create_account(Account::new(
        "Dana Moreira",
        "dana.moreira@example.com",
        "change-me",
        ROLE_ADMIN,
    )) else {
        eprintln!("account create declined");
        return;
    };
    println!("account inserted id={}", account.id);

    if let Some(post) = posts.create_post(Post::new(
        "Welcome to brightboard",
        "First post on the new board.",
        account.id,
    )) {
        println!("post inserted id={} image_url={}", post.id, post.image_url);
    }

    if let Some(task) = tasks.create_task(Task::new("Set up the board", "", account.id)) {
        println!(
            "task inserted id={} status={} priority={}",
            task.id, task.status, task.priority
        );
    }

    if let Some(message) = messages.save_message(ContactMessage::new(
        "Visitor",
        "visitor@example.com",
        "",
        "Hello",
        "Great board!",
    )) {
        println!("contact message inserted id={}", message.id);
    }

    let mut renamed = account;
    renamed.name = "Dana M.".to_string();
    println!("account updated={}", accounts.update_account(&mut renamed));
    println!("accounts listed={}", accounts.list_accounts().len());
    println!("account deleted={}", accounts.delete_account(renamed.id));
}
