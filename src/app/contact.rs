use std::future::Future;

use leptos::{either::Either, ev::SubmitEvent, prelude::*, server_fn::codec::Json, task::spawn_local};

use crate::contact::{
    deliver, ContactForm, ContactRequest, ContactSender, Field, ModalState, Notice, RequestKind,
    SubmitError,
};

use super::notifications::Notifications;

const INPUT_CLASS: &str = "h-12 w-full rounded-md border border-white/10 bg-white/5 px-3 text-white placeholder:text-zinc-600 focus:border-orange-500/50 focus:outline-none focus:ring-2 focus:ring-orange-500/20";
const TEXTAREA_CLASS: &str = "min-h-[120px] w-full resize-none rounded-md border border-white/10 bg-white/5 px-3 py-2 text-white placeholder:text-zinc-600 focus:border-orange-500/50 focus:outline-none focus:ring-2 focus:ring-orange-500/20";

#[server(input = Json)]
pub async fn send_contact_email(request: ContactRequest) -> Result<(), ServerFnError> {
    let missing = request.validate();
    if !missing.is_empty() {
        tracing::warn!(kind = %request.kind, missing = missing.count(), "rejected contact request");
        return Err(ServerFnError::new("Missing required fields"));
    }
    record_request(&request);
    Ok(())
}

/// Delivery itself lives outside this site; the structured record is what gets
/// picked up. Personal details stay out of `info`.
#[cfg(feature = "ssr")]
fn record_request(request: &ContactRequest) -> uuid::Uuid {
    let request_id = uuid::Uuid::new_v4();
    tracing::info!(%request_id, kind = %request.kind, "contact request received");
    tracing::debug!(
        %request_id,
        name = %request.name,
        email = %request.email,
        phone_number = %request.phone_number,
        description = %request.description,
        "contact request details"
    );
    request_id
}

/// Sends through the `send_contact_email` server function.
struct ServerFnSender;

impl ContactSender for ServerFnSender {
    type Error = ServerFnError;

    fn send(&self, request: ContactRequest) -> impl Future<Output = Result<(), ServerFnError>> {
        send_contact_email(request)
    }
}

#[component]
pub fn ContactModal(modal: RwSignal<ModalState>) -> impl IntoView {
    let close = move || modal.update(|m| m.close());

    view! {
        <Show when=move || modal.get().is_open>
            {move || {
                let kind = modal.get_untracked().kind;
                view! {
                    <div
                        class="fixed inset-0 z-40 flex items-center justify-center bg-black/70 px-4"
                        on:click=move |_| close()
                    >
                        <div
                            class="relative w-full border border-white/10 bg-zinc-950/80 p-6 text-left text-white backdrop-blur-xl sm:max-w-[500px] sm:rounded-2xl"
                            role="dialog"
                            aria-modal="true"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <button
                                type="button"
                                class="absolute top-4 right-4 text-zinc-400 hover:text-white"
                                aria-label="Close"
                                on:click=move |_| close()
                            >
                                "✕"
                            </button>
                            <h2 class="bg-gradient-to-r from-white to-white/60 bg-clip-text text-2xl font-black tracking-tight text-transparent">
                                {kind.title()}
                            </h2>
                            <p class="mt-2 text-base text-zinc-400">{kind.blurb()}</p>
                            <ContactFormView kind on_success=Callback::new(move |_| close()) />
                        </div>
                    </div>
                }
            }}
        </Show>
    }
}

#[component]
fn ContactFormView(kind: RequestKind, on_success: Callback<()>) -> impl IntoView {
    let notifications = expect_context::<Notifications>();
    let form = RwSignal::new(ContactForm::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let request = match form.try_update(|f| f.begin_submit(kind)) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::debug!("{kind} request not sent: {e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let result = deliver(&ServerFnSender, request).await;
            resolve_submission(form, result, notifications, on_success);
        });
    };

    view! {
        <form on:submit=on_submit class="flex flex-col gap-5 py-4">
            <FormField form field=Field::Name label="Full Name" placeholder="Enter your full name" />
            <FormField
                form
                field=Field::Email
                label="Email Address"
                placeholder="name@example.com"
                input_type="email"
            />
            <FormField
                form
                field=Field::PhoneNumber
                label="Phone Number"
                placeholder="123-456-7890"
            />
            <FormField
                form
                field=Field::Description
                label=kind.description_label()
                placeholder=kind.description_placeholder()
                multiline=true
            />
            <div class="pt-2">
                <button
                    type="submit"
                    disabled=move || form.with(|f| f.is_submitting())
                    class="h-12 w-full rounded-md bg-gradient-to-r from-orange-500 to-orange-600 text-sm font-bold tracking-wider text-white transition-all hover:from-orange-400 hover:to-orange-500 hover:shadow-[0_0_20px_rgba(249,115,22,0.3)] disabled:opacity-50"
                >
                    {move || {
                        if form.with(|f| f.is_submitting()) {
                            "SENDING REQUEST..."
                        } else {
                            "SUBMIT REQUEST"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}

/// Settles a finished send: updates the form, publishes exactly one notice and
/// runs `on_success` after a successful send. The modal can be dismissed while
/// the request is in flight, so the form and callback may already be disposed.
fn resolve_submission(
    form: RwSignal<ContactForm>,
    result: Result<(), SubmitError>,
    notifications: Notifications,
    on_success: Callback<()>,
) -> Notice {
    let succeeded = result.is_ok();
    let notice = form
        .try_update(|f| f.finish_submit(result.clone()))
        .unwrap_or_else(|| Notice::from_result(&result));
    notifications.publish(notice);
    if succeeded && on_success.try_run(()).is_none() {
        log::debug!("contact form closed before the request finished");
    }
    notice
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());
    let set_value = move |v: String| form.update(|f| f.set(field, v));
    let blur = move || form.update(|f| f.blur(field));

    let control = if multiline {
        Either::Left(view! {
            <textarea
                id=field.id()
                class=TEXTAREA_CLASS
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
                on:blur=move |_| blur()
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=field.id()
                type=input_type.unwrap_or("text")
                class=INPUT_CLASS
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| set_value(event_target_value(&ev))
                on:blur=move |_| blur()
            />
        })
    };

    view! {
        <div class="space-y-2">
            <label
                for=field.id()
                class="text-xs font-bold tracking-widest text-zinc-400 uppercase"
            >
                {label}
            </label>
            {control}
            {move || {
                form.with(|f| f.error(field))
                    .map(|msg| view! { <p class="text-xs font-medium text-red-400">{msg}</p> })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "ssr")]
    use std::{io, sync::Mutex};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use crate::contact::SubmitState;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Jamie Wong");
        form.set(Field::Email, "jamie@example.com");
        form.set(Field::PhoneNumber, "403-555-0199");
        form.set(Field::Description, "Looking for a rec team");
        form
    }

    /// A submitting form and a counting completion callback, both owned by
    /// `modal` the way the `<Show>` child scope owns them on the page.
    fn open_modal(modal: &Owner) -> (RwSignal<ContactForm>, Callback<()>, Arc<AtomicUsize>) {
        let closed = Arc::new(AtomicUsize::new(0));
        modal.with(|| {
            let form = RwSignal::new(filled_form());
            form.update(|f| {
                f.begin_submit(RequestKind::Join)
                    .expect("filled form should submit");
            });
            let counter = Arc::clone(&closed);
            let on_success = Callback::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
            (form, on_success, closed)
        })
    }

    #[test]
    fn test_success_notifies_once_and_closes() {
        let owner = Owner::new();
        owner.set();
        let notifications = Notifications::provide();
        let modal = owner.child();
        let (form, on_success, closed) = open_modal(&modal);

        let notice = resolve_submission(form, Ok(()), notifications, on_success);

        assert_eq!(notice, Notice::Sent);
        assert_eq!(notifications.showing(), vec![Notice::Sent]);
        assert_eq!(closed.load(Ordering::SeqCst), 1);
        assert_eq!(form.with_untracked(|f| f.state()), SubmitState::Succeeded);
    }

    #[test]
    fn test_failure_notifies_once_and_stays_open() {
        let owner = Owner::new();
        owner.set();
        let notifications = Notifications::provide();
        let modal = owner.child();
        let (form, on_success, closed) = open_modal(&modal);

        let notice = resolve_submission(
            form,
            Err(SubmitError::SendFailed),
            notifications,
            on_success,
        );

        assert_eq!(notice, Notice::Failed);
        assert_eq!(notifications.showing(), vec![Notice::Failed]);
        assert_eq!(closed.load(Ordering::SeqCst), 0);
        form.with_untracked(|f| {
            assert!(!f.is_submitting());
            assert_eq!(f.value(Field::Name), "Jamie Wong");
            assert_eq!(f.value(Field::Description), "Looking for a rec team");
        });
    }

    #[test]
    fn test_modal_dismissed_while_sending() {
        let owner = Owner::new();
        owner.set();
        let notifications = Notifications::provide();
        let modal = owner.child();
        let (form, on_success, closed) = open_modal(&modal);

        // user closes the dialog before the send resolves
        modal.cleanup();
        drop(modal);

        let notice = resolve_submission(form, Ok(()), notifications, on_success);

        assert_eq!(notice, Notice::Sent);
        assert_eq!(notifications.showing(), vec![Notice::Sent]);
        assert_eq!(closed.load(Ordering::SeqCst), 0);
    }

    #[cfg(feature = "ssr")]
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    #[cfg(feature = "ssr")]
    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .expect("log buffer lock")
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_request_record_keeps_details_out_of_info() {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer({
                let buffer = buffer.clone();
                move || buffer.clone()
            })
            .finish();
        let request = ContactRequest {
            name: "Jamie Wong".to_string(),
            email: "jamie@example.com".to_string(),
            phone_number: "403-555-0199".to_string(),
            description: "Looking for a rec team".to_string(),
            kind: RequestKind::Sponsor,
        };

        let request_id =
            tracing::subscriber::with_default(subscriber, || record_request(&request));

        let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("contact request received"), "{logged}");
        assert!(logged.contains(&request_id.to_string()), "{logged}");
        assert!(logged.contains("sponsor"), "{logged}");
        for detail in ["Jamie Wong", "jamie@example.com", "403-555-0199", "rec team"] {
            assert!(!logged.contains(detail), "{detail} leaked into: {logged}");
        }
    }
}
