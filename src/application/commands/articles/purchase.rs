// src/application/commands/articles/purchase.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::PurchaseReceiptDto,
        error::{ApplicationError, ApplicationResult},
        ports::settlement::{PreparedTransfer, TransferRequest},
    },
    domain::{
        account::{AccountId, Amount},
        article::ArticleId,
    },
};

pub struct PurchaseArticleCommand {
    pub article_id: u64,
    pub payment: u128,
}

impl ArticleCommandService {
    /// Buys an article for exactly its price.
    ///
    /// Guards run first; the payment is then reserved and committed, and only after the
    /// funds have moved is the buyer recorded. The write lock is held throughout, so no
    /// reader sees a buyer without a completed payment or the reverse.
    pub async fn purchase_article(
        &self,
        buyer: &AccountId,
        command: PurchaseArticleCommand,
    ) -> ApplicationResult<PurchaseReceiptDto> {
        let id = ArticleId(command.article_id);
        let payment = Amount::new(command.payment);

        let mut ledger = self.ledger.write().await;
        let authorization = ledger
            .authorize_purchase(id, buyer, payment)
            .inspect_err(|err| {
                tracing::debug!(article_id = %id, buyer = %buyer, error = %err, "purchase rejected");
            })?;

        let transfer = self
            .settlement
            .prepare(TransferRequest {
                from: buyer.clone(),
                to: authorization.seller().clone(),
                amount: payment,
            })
            .await
            .inspect_err(|err| {
                tracing::debug!(article_id = %id, buyer = %buyer, error = %err, "payment could not be reserved");
            })?;

        if let Err(err) = self.settlement.commit(&transfer).await {
            tracing::warn!(article_id = %id, transfer_id = %transfer.id, error = %err, "payment commit failed");
            self.release(&transfer).await;
            return Err(err.into());
        }

        let sold_at = self.clock.now();
        let event = match ledger.complete_purchase(authorization, sold_at) {
            Ok(event) => event,
            Err(err) => {
                self.refund(&transfer).await?;
                return Err(err.into());
            }
        };
        let record = self.events.publish(event);
        drop(ledger);

        tracing::info!(
            article_id = %id,
            buyer = %buyer,
            seller = %transfer.request.to,
            amount = %payment,
            sequence = record.sequence,
            "article sold"
        );

        Ok(PurchaseReceiptDto {
            article_id: id.into(),
            seller: transfer.request.to.to_string(),
            buyer: buyer.to_string(),
            amount: payment.value(),
            sold_at,
        })
    }

    async fn release(&self, transfer: &PreparedTransfer) {
        if let Err(err) = self.settlement.abort(transfer).await {
            tracing::error!(transfer_id = %transfer.id, error = %err, "failed to release reserved payment");
        }
    }

    /// Sends a committed payment back to the buyer when the ledger refused to record the sale.
    async fn refund(&self, transfer: &PreparedTransfer) -> ApplicationResult<()> {
        let reverse = TransferRequest {
            from: transfer.request.to.clone(),
            to: transfer.request.from.clone(),
            amount: transfer.request.amount,
        };

        let refund = self.settlement.prepare(reverse).await;
        let outcome = match refund {
            Ok(prepared) => self.settlement.commit(&prepared).await,
            Err(err) => Err(err),
        };

        outcome.map_err(|err| {
            tracing::error!(transfer_id = %transfer.id, error = %err, "refund of committed payment failed");
            ApplicationError::infrastructure(format!(
                "payment {} moved but the sale was not recorded: {err}",
                transfer.id
            ))
        })
    }
}
