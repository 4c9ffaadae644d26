use dioxus::prelude::*;
use ui::LangBlocks;

#[component]
pub fn Terms() -> Element {
    let lang = ui::use_lang()();
    rsx! {
        document::Title { {ui::t(lang, "terms.title")} }

        div { class: "legal_page",
            a { class: "back_home", href: "/", {ui::t(lang, "common.back_home")} }

            LangBlocks {
                zh: rsx! {
                    h2 { "用户协议" }
                    p { "更新日期：2026年1月1日" }

                    h3 { "服务说明" }
                    p {
                        "i 宠家 - iPet Family 提供 AI 宠物品种识别、健康咨询与艺术照生成功能。"
                        "AI 输出的识别与咨询结果仅供参考，不构成兽医诊断或医疗建议；"
                        "宠物出现健康问题时请及时就医。"
                    }

                    h3 { "用户行为" }
                    p {
                        "您承诺不上传违法、侵权或与宠物无关的内容，不以任何方式干扰服务的正常运行。"
                    }

                    h3 { "知识产权" }
                    p {
                        "您对上传的照片保留全部权利，并授予我们为完成识别或生成任务所必需的处理权限。"
                        "生成的艺术照供您个人使用。"
                    }

                    h3 { "免责声明" }
                    p {
                        "服务按\"现状\"提供。在适用法律允许的范围内，我们不对识别结果的准确性承担责任。"
                    }

                    h3 { "协议变更" }
                    p {
                        "我们可能不时更新本协议，更新后的版本将在本页面发布并即时生效。"
                    }
                },
                en: rsx! {
                    h2 { "Terms of Service" }
                    p { "Last updated: January 1, 2026" }

                    h3 { "The Service" }
                    p {
                        "iPet Family provides AI pet breed recognition, health consultation, and art "
                        "photo generation. AI output is informational only and is not veterinary "
                        "diagnosis or medical advice; see a veterinarian when your pet is unwell."
                    }

                    h3 { "Acceptable Use" }
                    p {
                        "You agree not to upload unlawful, infringing, or unrelated content, and not "
                        "to interfere with the operation of the service."
                    }

                    h3 { "Intellectual Property" }
                    p {
                        "You retain all rights to photos you upload and grant us only the processing "
                        "rights needed to complete the requested task. Generated art photos are for "
                        "your personal use."
                    }

                    h3 { "Disclaimer" }
                    p {
                        "The service is provided \"as is\". To the extent permitted by law, we accept "
                        "no liability for the accuracy of recognition results."
                    }

                    h3 { "Changes" }
                    p {
                        "We may update these terms from time to time; updated versions are posted on "
                        "this page and take effect immediately."
                    }
                },
            }
        }
    }
}
