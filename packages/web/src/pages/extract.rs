//! Extraction page component

use dioxus::prelude::*;
use extract_client::ExtractResponse;

use crate::components::{LoadingDots, OutputPanel};
use crate::state::{ExtractForm, Phase};

/// The single ParseBot page: URL + prompt in, schema + data out
#[component]
pub fn Extract() -> Element {
    let mut form = use_signal(ExtractForm::new);

    let handle_extract = move |_| {
        // None when a field is empty or a request is in flight
        let Some((generation, request)) = form.write().begin_submit() else {
            return;
        };

        spawn(async move {
            let outcome = extract_data(request.url, request.prompt)
                .await
                .map_err(|e| e.to_string());

            if let Err(message) = &outcome {
                tracing::error!(%message, "Extraction failed");
            }

            form.write().resolve(generation, outcome);
        });
    };

    let url = form.read().url().to_string();
    let prompt = form.read().prompt().to_string();
    let pending = form.read().is_pending();
    let can_submit = form.read().can_submit();
    let phase = form.read().phase().clone();

    rsx! {
        div {
            class: "min-h-screen bg-white p-8",
            div {
                class: "max-w-4xl mx-auto",

                // Header
                div {
                    class: "mb-8",
                    h1 { class: "text-3xl font-semibold text-black mb-1", "ParseBot" }
                    p {
                        class: "text-gray-500",
                        "Extract structured data from any website using AI"
                    }
                }

                // Form card
                div {
                    class: "bg-white rounded-lg border border-gray-200 p-6 shadow-sm",
                    div {
                        class: "space-y-4",
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Website URL"
                            }
                            input {
                                r#type: "url",
                                value: "{url}",
                                oninput: move |e| form.write().set_url(e.value()),
                                placeholder: "https://example.com",
                                class: "w-full px-3 py-2 bg-white border border-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-gray-400"
                            }
                        }

                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Extraction Prompt"
                            }
                            textarea {
                                value: "{prompt}",
                                oninput: move |e| form.write().set_prompt(e.value()),
                                placeholder: "What data would you like to extract? (e.g., 'get all product names and prices')",
                                rows: "4",
                                class: "w-full px-3 py-2 bg-white border border-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-gray-400 resize-none"
                            }
                        }

                        button {
                            class: "w-full py-2 px-4 bg-black hover:bg-gray-800 disabled:bg-gray-200 disabled:text-gray-500 text-white font-medium rounded-md",
                            disabled: !can_submit,
                            onclick: handle_extract,
                            if pending {
                                span {
                                    class: "inline-flex items-center",
                                    LoadingDots {}
                                    span { class: "ml-2", "Extracting..." }
                                }
                            } else {
                                "Extract Data"
                            }
                        }
                    }

                    if let Phase::Failed(message) = &phase {
                        div {
                            class: "mt-4 p-3 bg-red-50 border border-red-200 rounded-md",
                            p { class: "text-sm text-red-700", "{message}" }
                            button {
                                class: "mt-2 text-sm text-gray-500 underline",
                                onclick: move |_| form.write().reset(),
                                "Start over"
                            }
                        }
                    }

                    if let Phase::Success(response) = &phase {
                        div {
                            class: "mt-6 space-y-4",
                            OutputPanel {
                                title: "Generated Schema",
                                content: response.schema_pretty(),
                            }
                            OutputPanel {
                                title: "Extracted Data",
                                content: response.data_pretty(),
                            }
                            button {
                                class: "text-sm text-gray-500 underline",
                                onclick: move |_| form.write().reset(),
                                "Start over"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[server]
async fn extract_data(url: String, prompt: String) -> Result<ExtractResponse, ServerFnError> {
    use extract_client::{ExtractClient, ExtractRequest, RetryPolicy};

    let client = ExtractClient::new(crate::config::api_url());
    let request = ExtractRequest { url, prompt };

    // Retries are transparent to the form: the page only ever sees the
    // final outcome.
    RetryPolicy::default()
        .run(|| client.extract(&request))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
