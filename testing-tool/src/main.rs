use colored::*;
use serde_json::{json, Value};
use std::io::{self, Write};

type ToolResult<T> = Result<T, Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> ToolResult<()> {
    println!("{}", "🚗 Vehicle Booking Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = std::env::var("BOOKING_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let client = BookingClient::new(base_url);

    // Paso 1: Crear sesión de reserva
    let session = client.post("/api/booking/sessions", None).await?;
    let session_id = session["data"]["sessionId"]
        .as_str()
        .ok_or("La respuesta no contiene sessionId")?
        .to_string();
    println!("{} {}", "🆕 Sesión creada:".bright_green(), session_id);

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 👤 Nombre del cliente");
        println!("2. 🚙 Tipo de vehículo");
        println!("3. 🔧 Modelo");
        println!("4. 📅 Fechas");
        println!("5. 📝 Ver resumen");
        println!("6. ✅ Enviar reserva");
        println!("7. 🚪 Salir");
        let choice = prompt("Selecciona una opción (1-7): ")?;

        let result = match choice.as_str() {
            "1" => set_customer(&client, &session_id).await,
            "2" => select_type(&client, &session_id).await,
            "3" => select_model(&client, &session_id).await,
            "4" => set_dates(&client, &session_id).await,
            "5" => show_summary(&client, &session_id).await,
            "6" => submit(&client, &session_id).await,
            "7" => {
                client.delete(&format!("/api/booking/sessions/{}", session_id)).await?;
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("{} {}", "❌ Error:".bright_red(), e);
        }
    }

    Ok(())
}

struct BookingClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookingClient {
    fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get(&self, path: &str) -> ToolResult<Value> {
        let response = self.http.get(format!("{}{}", self.base_url, path)).send().await?;
        Ok(response.json().await?)
    }

    async fn post(&self, path: &str, body: Option<Value>) -> ToolResult<Value> {
        let mut request = self.http.post(format!("{}{}", self.base_url, path));
        if let Some(body) = body {
            request = request.json(&body);
        }
        Ok(request.send().await?.json().await?)
    }

    async fn put(&self, path: &str, body: Value) -> ToolResult<Value> {
        let response = self
            .http
            .put(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, path: &str) -> ToolResult<Value> {
        let response = self.http.delete(format!("{}{}", self.base_url, path)).send().await?;
        Ok(response.json().await?)
    }
}

fn prompt(label: &str) -> ToolResult<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Mostrar el resultado de una mutación de sesión: resumen o mensaje de error
fn print_session_response(body: &Value) {
    if body["success"] == true {
        let state = body["data"]["state"].as_str().unwrap_or("?");
        println!("{} {}", "🔄 Estado:".bright_cyan(), state);
    } else {
        let message = body["message"].as_str().unwrap_or("error desconocido");
        println!("{} {}", "❌".bright_red(), message.bright_red());
    }
}

async fn set_customer(client: &BookingClient, session_id: &str) -> ToolResult<()> {
    let first_name = prompt("Nombre: ")?;
    let last_name = prompt("Apellido: ")?;
    let body = client
        .put(
            &format!("/api/booking/sessions/{}/customer", session_id),
            json!({ "firstName": first_name, "lastName": last_name }),
        )
        .await?;
    print_session_response(&body);
    Ok(())
}

async fn select_type(client: &BookingClient, session_id: &str) -> ToolResult<()> {
    let types = client.get("/api/catalog/types").await?;
    println!("{}", "🚙 TIPOS DISPONIBLES".bright_cyan().bold());
    for vehicle_type in types["data"].as_array().into_iter().flatten() {
        println!("   {} - {}", vehicle_type["id"], vehicle_type["name"].as_str().unwrap_or(""));
    }

    let type_id: u32 = prompt("Id del tipo: ")?.parse()?;
    let body = client
        .put(
            &format!("/api/booking/sessions/{}/vehicle-type", session_id),
            json!({ "vehicleTypeId": type_id }),
        )
        .await?;
    print_session_response(&body);
    Ok(())
}

async fn select_model(client: &BookingClient, session_id: &str) -> ToolResult<()> {
    let session = client.get(&format!("/api/booking/sessions/{}", session_id)).await?;
    let type_id = match session["data"]["selection"]["selectedTypeId"].as_u64() {
        Some(id) => id,
        None => {
            println!("{}", "⚠️ Primero selecciona un tipo de vehículo".bright_yellow());
            return Ok(());
        }
    };

    let models = client.get(&format!("/api/catalog/types/{}/models", type_id)).await?;
    println!("{}", "🔧 MODELOS DISPONIBLES".bright_cyan().bold());
    for model in models["data"].as_array().into_iter().flatten() {
        println!("   {} - {}", model["id"], model["name"].as_str().unwrap_or(""));
    }

    let model_id: u32 = prompt("Id del modelo: ")?.parse()?;
    let body = client
        .put(
            &format!("/api/booking/sessions/{}/vehicle-model", session_id),
            json!({ "vehicleModelId": model_id }),
        )
        .await?;
    print_session_response(&body);

    // Detalle del modelo elegido
    let details = client
        .get(&format!("/api/catalog/types/{}/models/{}", type_id, model_id))
        .await?;
    if details["success"] == true {
        let model = &details["data"];
        println!();
        println!("{}", model["name"].as_str().unwrap_or("").bright_white().bold());
        println!("{}", model["description"].as_str().unwrap_or(""));
        if let Some(image) = model["image"].as_str() {
            println!("🖼️  {}", image);
        }
    }
    Ok(())
}

async fn set_dates(client: &BookingClient, session_id: &str) -> ToolResult<()> {
    let year = prompt("Año del calendario (ej: 2024): ")?;
    let month = prompt("Mes (1-12): ")?;
    let calendar = client
        .get(&format!("/api/availability/month?year={}&month={}", year, month))
        .await?;

    println!("{}", "📅 CALENDARIO".bright_cyan().bold());
    for day in calendar["data"]["days"].as_array().into_iter().flatten() {
        let date = day["date"].as_str().unwrap_or("");
        if day["booked"] == true {
            println!("   {} {}", date.bright_red(), "(reservado)".bright_red());
        } else {
            println!("   {}", date.bright_green());
        }
    }

    let start_date = prompt("Fecha inicio (YYYY-MM-DD): ")?;
    let end_date = prompt("Fecha fin (YYYY-MM-DD): ")?;
    let body = client
        .put(
            &format!("/api/booking/sessions/{}/dates", session_id),
            json!({ "startDate": start_date, "endDate": end_date }),
        )
        .await?;
    print_session_response(&body);
    Ok(())
}

async fn show_summary(client: &BookingClient, session_id: &str) -> ToolResult<()> {
    let session = client.get(&format!("/api/booking/sessions/{}", session_id)).await?;
    let summary = &session["data"]["summary"];

    println!("{}", "📝 RESUMEN DE RESERVA".bright_cyan().bold());
    println!("{}", summary["text"].as_str().unwrap_or(""));
    if summary["eligible"] == true {
        println!("{}", "✅ Lista para enviar".bright_green());
    } else {
        println!("{}", "⏳ Faltan datos".bright_yellow());
    }
    Ok(())
}

async fn submit(client: &BookingClient, session_id: &str) -> ToolResult<()> {
    let body = client
        .post(&format!("/api/booking/sessions/{}/submit", session_id), None)
        .await?;

    let message = body["message"].as_str().unwrap_or("");
    if body["success"] == true {
        println!("{}", message.bright_green().bold());
        println!("{}", serde_json::to_string_pretty(&body["data"]["booking"])?);
    } else {
        println!("{}", message.bright_red().bold());
    }
    Ok(())
}
