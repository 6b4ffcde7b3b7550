//! Interactive text console over a `CatalogClient`.
//!
//! Reads one answer per line from any async reader and writes prompts and
//! results to any async writer, so the whole menu can be driven from a byte
//! slice in tests. End of input behaves like choosing Exit.

use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, instrument};
use crate::catalog::input::{parse_id, parse_price, parse_quantity};
use crate::catalog::CatalogResult;
use crate::clients::CatalogClient;
use crate::domain::{SearchCriteria, Sweet, SweetCreate};

const MENU: &str = "\n--- Sweet Shop Management ---\n\
1. Add Sweet\n\
2. View Available Sweets\n\
3. Search Sweets\n\
4. Purchase Sweet\n\
5. Restock Sweet\n\
6. Delete Sweet\n\
7. Exit\n\
-----------------------------";

pub struct Console<R, W> {
    input: Lines<R>,
    output: W,
    client: CatalogClient,
    closed: bool,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, client: CatalogClient) -> Self {
        Self {
            input: input.lines(),
            output,
            client,
            closed: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the menu loop until the user exits or input ends.
    #[instrument(name = "console", skip(self))]
    pub async fn run(&mut self) -> io::Result<()> {
        while !self.closed {
            self.say(MENU).await?;
            let Some(choice) = self.ask("Enter your choice: ").await? else {
                break;
            };
            debug!(choice = %choice, "Menu choice");

            match choice.as_str() {
                "1" => self.handle_add_sweet().await?,
                "2" => self.handle_view_sweets().await?,
                "3" => self.handle_search_sweets().await?,
                "4" => self.handle_purchase_sweet().await?,
                "5" => self.handle_restock_sweet().await?,
                "6" => self.handle_delete_sweet().await?,
                "7" => break,
                _ => self.say("Invalid choice. Please try again.").await?,
            }
        }
        self.say("Exiting Sweet Shop Management. Goodbye!").await
    }

    async fn handle_add_sweet(&mut self) -> io::Result<()> {
        self.say("\n--- Add New Sweet ---").await?;
        let Some(id) = self.ask("Enter Sweet ID (number): ").await? else { return Ok(()) };
        let Some(name) = self.ask("Enter Sweet Name: ").await? else { return Ok(()) };
        let Some(category) = self.ask("Enter Sweet Category: ").await? else { return Ok(()) };
        let Some(price) = self.ask("Enter Sweet Price: ").await? else { return Ok(()) };
        let Some(quantity) = self.ask("Enter Sweet Quantity: ").await? else { return Ok(()) };

        let result = match parse_create(&id, name, category, &price, &quantity) {
            Ok(create) => self.client.add_sweet(create).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(sweet) => {
                self.say(&format!("Sweet \"{}\" (ID: {}) added successfully!", sweet.name, sweet.id))
                    .await
            }
            Err(e) => self.say(&format!("Error adding sweet: {e}")).await,
        }
    }

    async fn handle_view_sweets(&mut self) -> io::Result<()> {
        self.say("\n--- Available Sweets (In Stock) ---").await?;
        match self.client.list_sweets().await {
            Ok(sweets) if sweets.is_empty() => self.say("No sweets currently in stock.").await,
            Ok(sweets) => self.show(&sweets).await,
            Err(e) => self.say(&format!("Error listing sweets: {e}")).await,
        }
    }

    async fn handle_search_sweets(&mut self) -> io::Result<()> {
        self.say("\n--- Search Sweets ---").await?;
        self.say("Enter search criteria (leave blank for no filter):").await?;
        let Some(name) = self.ask("Search by Name (partial, case-insensitive): ").await? else { return Ok(()) };
        let Some(category) = self.ask("Search by Category (partial, case-insensitive): ").await? else { return Ok(()) };
        let Some(min_price) = self.ask("Search by Minimum Price: ").await? else { return Ok(()) };
        let Some(max_price) = self.ask("Search by Maximum Price: ").await? else { return Ok(()) };

        let result = match SearchCriteria::from_input(&name, &category, &min_price, &max_price) {
            Ok(criteria) => self.client.search_sweets(criteria).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(sweets) if sweets.is_empty() => self.say("No sweets found matching your criteria.").await,
            Ok(sweets) => {
                self.say("\n--- Search Results ---").await?;
                self.show(&sweets).await
            }
            Err(e) => self.say(&format!("Error during search: {e}")).await,
        }
    }

    async fn handle_purchase_sweet(&mut self) -> io::Result<()> {
        self.say("\n--- Purchase Sweet ---").await?;
        let Some(id) = self.ask("Enter Sweet ID to purchase: ").await? else { return Ok(()) };
        let Some(quantity) = self.ask("Enter Quantity to purchase: ").await? else { return Ok(()) };

        let result = match (parse_id(&id), parse_quantity(&quantity)) {
            (Ok(id), Ok(quantity)) => self
                .client
                .purchase_sweet(id, quantity)
                .await
                .map(|sweet| (quantity, sweet)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        match result {
            Ok((bought, sweet)) => {
                self.say(&format!(
                    "Successfully purchased {bought} of \"{}\". New quantity: {}",
                    sweet.name, sweet.quantity
                ))
                .await
            }
            Err(e) => self.say(&format!("Error purchasing sweet: {e}")).await,
        }
    }

    async fn handle_restock_sweet(&mut self) -> io::Result<()> {
        self.say("\n--- Restock Sweet ---").await?;
        let Some(id) = self.ask("Enter Sweet ID to restock: ").await? else { return Ok(()) };
        let Some(quantity) = self.ask("Enter Quantity to restock: ").await? else { return Ok(()) };

        let result = match (parse_id(&id), parse_quantity(&quantity)) {
            (Ok(id), Ok(quantity)) => self
                .client
                .restock_sweet(id, quantity)
                .await
                .map(|sweet| (quantity, sweet)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        };
        match result {
            Ok((added, sweet)) => {
                self.say(&format!(
                    "Successfully restocked {added} of \"{}\". New quantity: {}",
                    sweet.name, sweet.quantity
                ))
                .await
            }
            Err(e) => self.say(&format!("Error restocking sweet: {e}")).await,
        }
    }

    async fn handle_delete_sweet(&mut self) -> io::Result<()> {
        self.say("\n--- Delete Sweet ---").await?;
        let Some(id) = self.ask("Enter Sweet ID to delete: ").await? else { return Ok(()) };

        let result = match parse_id(&id) {
            Ok(id) => self.client.delete_sweet(id).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(sweet) => {
                self.say(&format!("Sweet \"{}\" (ID: {}) deleted successfully.", sweet.name, sweet.id))
                    .await
            }
            Err(e) => self.say(&format!("Error deleting sweet: {e}")).await,
        }
    }

    /// Prompts and reads one trimmed line; `None` once input is exhausted.
    async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;
        match self.input.next_line().await? {
            Some(line) => Ok(Some(line.trim().to_string())),
            None => {
                self.closed = true;
                self.output.write_all(b"\n").await?;
                Ok(None)
            }
        }
    }

    async fn say(&mut self, line: &str) -> io::Result<()> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    async fn show(&mut self, sweets: &[Sweet]) -> io::Result<()> {
        for sweet in sweets {
            self.say(&render(sweet)).await?;
        }
        Ok(())
    }
}

pub fn render(sweet: &Sweet) -> String {
    format!(
        "ID: {}, Name: {}, Category: {}, Price: ${}, Quantity: {}",
        sweet.id, sweet.name, sweet.category, sweet.price, sweet.quantity
    )
}

fn parse_create(
    id: &str,
    name: String,
    category: String,
    price: &str,
    quantity: &str,
) -> CatalogResult<SweetCreate> {
    Ok(SweetCreate {
        id: parse_id(id)?,
        name,
        category,
        price: parse_price(price)?,
        quantity: parse_quantity(quantity)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::{create_mock_client, respond_to_list};

    #[test]
    fn render_prints_whole_prices_without_decimals() {
        let sweet = Sweet::new(101, "Kaju Katli", "Nut-Based", 50.0, 20);
        assert_eq!(
            render(&sweet),
            "ID: 101, Name: Kaju Katli, Category: Nut-Based, Price: $50, Quantity: 20"
        );
        let sweet = Sweet::new(7, "Toffee", "Candy", 2.5, 1);
        assert!(render(&sweet).contains("Price: $2.5,"));
    }

    #[tokio::test]
    async fn test_view_renders_listed_sweets() {
        let (client, mut receiver) = create_mock_client(10);
        let responder = tokio::spawn(async move {
            respond_to_list(&mut receiver, vec![Sweet::new(107, "Lemon Drops", "Candy", 5.0, 25)]).await;
        });

        let mut console = Console::new(&b"2\n7\n"[..], Vec::new(), client);
        console.run().await.unwrap();
        responder.await.unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("ID: 107, Name: Lemon Drops, Category: Candy, Price: $5, Quantity: 25"));
        assert!(output.ends_with("Exiting Sweet Shop Management. Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_parse_errors_never_reach_the_service() {
        let (client, mut receiver) = create_mock_client(10);

        let input = b"4\nabc\n1\n3\n\n\nx\n\n";
        let mut console = Console::new(&input[..], Vec::new(), client);
        console.run().await.unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Error purchasing sweet: Sweet ID must be a whole number."));
        assert!(output.contains("Error during search: Price range values must be numbers."));

        // The console (and its client) is gone and nothing was ever sent
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_choice_and_eof() {
        let (client, _receiver) = create_mock_client(10);
        let mut console = Console::new(&b"9\n"[..], Vec::new(), client);
        console.run().await.unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Invalid choice. Please try again."));
        assert_eq!(output.matches("--- Sweet Shop Management ---").count(), 2);
        assert!(output.ends_with("Goodbye!\n"));
    }
}
