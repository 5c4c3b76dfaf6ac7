use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::{stagger_style, Reveal, FROM_LEFT, FROM_RIGHT, STAGGER_DELAY_MS};
use crate::config::ContactSettings;
use crate::contact::form::{ContactFormState, FieldStatus, SubmissionState, SubmissionTicket};
use crate::contact::schema::Field;
use crate::contact::submit::{SimulatedSubmitter, SubmitError, SubmitterHandle};
use crate::pages::content::CONTACT_CHANNELS;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Falls back to a `SimulatedSubmitter` paced by `settings`.
    #[prop_or_default]
    pub submitter: Option<SubmitterHandle>,
    #[prop_or_else(ContactSettings::from_build_env)]
    pub settings: ContactSettings,
}

fn default_submitter(settings: &ContactSettings) -> SimulatedSubmitter {
    SimulatedSubmitter::new(settings.submit_latency_ms)
}

fn resolve_submitter(props: &ContactFormProps) -> SubmitterHandle {
    match &props.submitter {
        Some(handle) => handle.clone(),
        None => SubmitterHandle::new(default_submitter(&props.settings)),
    }
}

pub enum ContactFormMsg {
    Update(Field, String),
    Blur(Field),
    Submit,
    SubmitFinished(SubmissionTicket, Result<(), SubmitError>),
    ResetElapsed(SubmissionTicket),
}

pub struct ContactForm {
    form: ContactFormState,
    submitter: SubmitterHandle,
    // Dropping the handle cancels the pending reset.
    reset_timer: Option<Timeout>,
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: ContactFormState::new(),
            submitter: resolve_submitter(ctx.props()),
            reset_timer: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.submitter = resolve_submitter(ctx.props());
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Update(field, value) => {
                self.form.update_field(field, value);
                true
            }
            ContactFormMsg::Blur(field) => {
                if self.form.is_touched(field) {
                    return false;
                }
                self.form.touch(field);
                true
            }
            ContactFormMsg::Submit => {
                let Some((ticket, data)) = self.form.begin_submit() else {
                    return false;
                };
                info!("Sending contact message for {}", self.form.values().company);
                let submitter = self.submitter.clone();
                ctx.link().send_future(async move {
                    let result = submitter.submit(data).await;
                    ContactFormMsg::SubmitFinished(ticket, result)
                });
                true
            }
            ContactFormMsg::SubmitFinished(ticket, result) => {
                if let Err(e) = &result {
                    warn!("Contact submission failed: {}", e);
                }
                if self.form.finish_submit(ticket, result) {
                    let link = ctx.link().clone();
                    self.reset_timer = Some(Timeout::new(
                        ctx.props().settings.reset_delay_ms,
                        move || link.send_message(ContactFormMsg::ResetElapsed(ticket)),
                    ));
                }
                true
            }
            ContactFormMsg::ResetElapsed(ticket) => {
                self.reset_timer = None;
                self.form.reset_elapsed(ticket);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if *self.form.submission() == SubmissionState::Submitted {
            return self.view_success(ctx);
        }

        html! {
            <div class="contact-grid">
                <Reveal motions={FROM_LEFT} class="contact-info">
                    <div>
                        <h3>{"Get in Touch"}</h3>
                        <p>{"Ready to streamline your workflow? Let's discuss how StreamLine can transform your team's productivity."}</p>
                    </div>
                    <div class="contact-channels">
                        { for CONTACT_CHANNELS.iter().map(|channel| html! {
                            <div class="contact-channel">
                                <div class="channel-icon fx-grow">{channel.icon}</div>
                                <div>
                                    <h4>{channel.title}</h4>
                                    <a href={channel.href}>{channel.content}</a>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="card response-card">
                        <h4>{"Quick Response Guarantee"}</h4>
                        <p>{"We typically respond to all inquiries within 2 hours during business hours."}</p>
                    </div>
                </Reveal>

                <Reveal motions={FROM_RIGHT} class="card form-card">
                    <h3>{"Send us a Message"}</h3>
                    <p class="card-description">
                        {"Fill out the form below and we'll get back to you as soon as possible."}
                    </p>
                    <form
                        class="contact-form"
                        onsubmit={ctx.link().callback(|e: SubmitEvent| {
                            e.prevent_default();
                            ContactFormMsg::Submit
                        })}
                    >
                        <div class="form-row">
                            { self.view_field(ctx, Field::Name) }
                            { self.view_field(ctx, Field::Email) }
                        </div>
                        <div class="form-row">
                            { self.view_field(ctx, Field::Company) }
                            { self.view_field(ctx, Field::Phone) }
                        </div>
                        { self.view_field(ctx, Field::Subject) }
                        { self.view_field(ctx, Field::Message) }

                        if let SubmissionState::Failed(reason) = self.form.submission() {
                            <div class="form-failure">
                                <span class="field-icon">{"⚠"}</span>
                                <span>{format!("We couldn't send your message ({}). Please try again.", reason)}</span>
                            </div>
                        }

                        { self.view_submit_button() }
                    </form>
                </Reveal>
            </div>
        }
    }
}

impl ContactForm {
    fn view_field(&self, ctx: &Context<Self>, field: Field) -> Html {
        let status = self.form.field_status(field);
        let input_class = classes!("form-input", status.border_class());
        let value = self.form.value(field).to_string();
        let onblur = ctx.link().callback(move |_: FocusEvent| ContactFormMsg::Blur(field));

        let control = if field == Field::Message {
            html! {
                <textarea
                    id={field.id()}
                    name={field.id()}
                    rows="5"
                    class={input_class}
                    placeholder={field.placeholder()}
                    {value}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        ContactFormMsg::Update(field, input.value())
                    })}
                    {onblur}
                />
            }
        } else {
            html! {
                <input
                    type={field.input_type()}
                    id={field.id()}
                    name={field.id()}
                    class={input_class}
                    placeholder={field.placeholder()}
                    {value}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        ContactFormMsg::Update(field, input.value())
                    })}
                    {onblur}
                />
            }
        };

        let label = if field.is_required() {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };

        html! {
            <div class="form-field">
                <label for={field.id()} class="form-label">{label}</label>
                <div class="form-control">
                    {control}
                    if field.is_required() && status == FieldStatus::Success {
                        <span class="field-icon success pop-in">{"✓"}</span>
                    }
                </div>
                if let Some(error) = self.form.field_error(field) {
                    <div class="field-message pop-in">
                        <span class="field-icon">{"⚠"}</span>
                        <span>{error.message}</span>
                    </div>
                }
            </div>
        }
    }

    fn view_submit_button(&self) -> Html {
        let submitting = *self.form.submission() == SubmissionState::Submitting;

        html! {
            <button
                type="submit"
                class="btn btn-primary btn-block fx-grow"
                disabled={!self.form.can_submit()}
            >
                if submitting {
                    <span class="button-content" key="loading">
                        <span class="loading-spinner"></span>
                        <span>{"Sending Message..."}</span>
                    </span>
                } else {
                    <span class="button-content" key="send">
                        <span>{"➤"}</span>
                        <span>{"Send Message"}</span>
                    </span>
                }
            </button>
        }
    }

    fn view_success(&self, ctx: &Context<Self>) -> Html {
        let drain = format!(
            "animation-duration: {}ms;",
            ctx.props().settings.reset_delay_ms
        );

        html! {
            <div class="contact-success pop-in">
                <div class="success-badge" style={stagger_style(0, 0, STAGGER_DELAY_MS)}>{"✓"}</div>
                <h3>{"Message Sent Successfully!"}</h3>
                <p>{"Thank you for reaching out. We'll get back to you within 24 hours."}</p>
                <div class="success-progress">
                    <div class="success-progress-bar" style={drain}></div>
                </div>
            </div>
        }
    }
}
