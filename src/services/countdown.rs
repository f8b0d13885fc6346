use crate::utils::datetime::{countdown_message, should_post_countdown, wedding_date};
use chrono::Utc;
use teloxide::prelude::*;
use tokio_cron_scheduler::{Job, JobScheduler};

/// Posts countdown updates to the announcement chat on a daily schedule.
/// How often a post actually goes out depends on how close the wedding
/// is; see [`should_post_countdown`]. There is no catch-up for days the
/// process was down.
pub struct CountdownService {
    bot: Bot,
    chat_id: ChatId,
    scheduler: JobScheduler,
}

impl CountdownService {
    pub async fn new(
        bot: Bot,
        chat_id: ChatId,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let scheduler = JobScheduler::new().await?;

        Ok(Self {
            bot,
            chat_id,
            scheduler,
        })
    }

    pub async fn start(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        // Check the posting policy once daily at 9 AM UTC
        let bot = self.bot.clone();
        let chat_id = self.chat_id;

        let countdown_job = Job::new_async("0 0 9 * * *", move |_uuid, _l| {
            let bot = bot.clone();
            Box::pin(async move {
                if let Err(e) = post_countdown_if_due(bot, chat_id).await {
                    tracing::error!("Failed to post countdown update: {}", e);
                }
            })
        })?;

        self.scheduler.add(countdown_job).await?;
        self.scheduler.start().await?;

        tracing::info!("Countdown service started - checking daily at 9 AM UTC");
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.scheduler.shutdown().await?;
        Ok(())
    }
}

async fn post_countdown_if_due(
    bot: Bot,
    chat_id: ChatId,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let now = Utc::now();

    if !should_post_countdown(now, wedding_date()) {
        return Ok(());
    }

    bot.send_message(chat_id, countdown_message(now)).await?;
    tracing::info!("Posted countdown update to chat {}", chat_id);
    Ok(())
}
