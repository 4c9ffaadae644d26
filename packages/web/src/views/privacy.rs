use dioxus::prelude::*;
use ui::LangBlocks;

/// Long-form content is written directly in the page, one block per
/// language, rather than going through the dictionary.
#[component]
pub fn Privacy() -> Element {
    let lang = ui::use_lang()();
    rsx! {
        document::Title { {ui::t(lang, "privacy.title")} }

        div { class: "legal_page",
            a { class: "back_home", href: "/", {ui::t(lang, "common.back_home")} }

            LangBlocks {
                zh: rsx! {
                    h2 { "隐私政策" }
                    p { "更新日期：2026年1月1日" }

                    h3 { "我们收集的信息" }
                    p {
                        "您在使用品种识别或艺术照生成功能时上传的宠物照片，仅用于完成对应的识别或生成任务。"
                        "健康咨询中输入的文字内容仅用于生成当次回答。"
                    }

                    h3 { "信息的使用与保留" }
                    p {
                        "照片与咨询内容在任务完成后即被删除，不会被用于训练模型，也不会与任何第三方共享或出售。"
                    }

                    h3 { "本地存储" }
                    p {
                        "语言偏好等网站设置仅保存在您浏览器的本地存储中，不会上传至任何服务器。"
                        "清除浏览器数据即可移除这些设置。"
                    }

                    h3 { "第三方服务" }
                    p {
                        "应用内可能包含应用商店提供的下载与统计服务，其数据处理行为适用相应商店的隐私政策。"
                    }

                    h3 { "联系我们" }
                    p { "如对本政策有任何疑问，请联系 support@ipetfamily.com。" }
                },
                en: rsx! {
                    h2 { "Privacy Policy" }
                    p { "Last updated: January 1, 2026" }

                    h3 { "Information We Collect" }
                    p {
                        "Pet photos you upload for breed recognition or art photo generation are used "
                        "only to complete that task. Text you enter in a health consultation is used "
                        "only to produce that answer."
                    }

                    h3 { "Use and Retention" }
                    p {
                        "Photos and consultation content are deleted once the task completes. They are "
                        "never used to train models, and never shared with or sold to third parties."
                    }

                    h3 { "Local Storage" }
                    p {
                        "Site settings such as your language preference are kept only in your "
                        "browser's local storage and are never uploaded. Clearing your browser data "
                        "removes them."
                    }

                    h3 { "Third-Party Services" }
                    p {
                        "The app may include download and analytics services provided by the app "
                        "stores; their data handling is governed by the respective store's privacy "
                        "policy."
                    }

                    h3 { "Contact" }
                    p { "Questions about this policy? Reach us at support@ipetfamily.com." }
                },
            }
        }
    }
}
