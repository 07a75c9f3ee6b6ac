pub const MAIN: &str = "🎯 Choose what you are interested in:";
pub const MAIN_FROM_CALLBACK: &str = "🏠 Main menu. Choose what you are interested in:";

pub const ABOUT: &str = "<b>🚀 About our platform</b>\n\n\
🔥 <a href='https://wincraft.casino/'>Wincraft Casino</a> is a fast-growing brand that has quickly \
become well known among partners and players worldwide.\n\n\
💎 We do not just follow trends, we set them. The team adapts the product to what the audience \
expects, ships new features and keeps the service level high.\n\n\
🤝 Every partner gets an individual approach. Success is built on trust, transparency and \
flexibility. Let's grow together!\n\n\
🔗 <b>Platform:</b> https://wincraft.casino/\n\
🔗 <b>Affiliate program:</b> https://affwin.partners/";

pub const CONDITIONS: &str = "<b>💼 Terms of cooperation</b>\n\nChoose a cooperation model:";

pub const CONDITIONS_CPA: &str = "<b>💰 CPA model (Cost Per Action)</b>\n\n\
✅ <b>Advantages:</b>\n\
• Payment per target action\n\
• Minimal risk for the partner\n\
• Good for beginners\n\
• Stable income\n\n\
💵 <b>FB rates for our main GEOs:</b>\n\
<pre>\
Tier  Country            Rate\n\
T1    FI (Finland)        170\n\
T1    CH (Switzerland)    295\n\
T3    KG (Kyrgyzstan)      60\n\
T3    AM (Armenia)         60\n\
T2    HU (Hungary)        160\n\
T3    GE (Georgia)         80\n\
T2    PL (Poland)         150\n\
T2    RS (Serbia)          75\n\
T1    CA (Canada)         220\n\
T1    IE (Ireland)        255\n\
T1    DE (Germany)        220\n\
T1    SE (Sweden)         215\n\
T2    SI (Slovenia)       130\n\
T2    SK (Slovakia)       130\n\
T3    TJ (Tajikistan)      65\n\
T3    MD (Moldova)         60\n\
T2    GR (Greece)         150\n\
T1    GB (UK)             225\n\
T1    FR (France)         185\
</pre>\n\n\
📊 <b>Full rate table:</b>\n\
https://docs.google.com/spreadsheets/d/1ObMQlGiY7PbxA0ZdQkZRjXvpbp5clpM4wA2X5CUvl5A/edit?usp=sharing\n\n\
💬 <b>Other options can be discussed individually</b>";

pub const CONDITIONS_RS: &str = "<b>📊 RS model (Revenue Share)</b>\n\n\
✨ <b>Premium terms for experienced partners</b>\n\n\
✅ <b>Advantages:</b>\n\
• Share of the client's turnover\n\
• High income potential\n\
• Long-term cooperation\n\
• Personal approach\n\n\
🌟 <b>Individual terms:</b>\n\
• Flexible percentage rates\n\
• Exclusive offers\n\
• Priority support\n\n\
👥 <b>Discuss individual terms:</b>\n\
• @makswincraft 🚀\n\
• @dosiTG 💼\n\
• @hugewinaffs 🌟\n\n\
<i>Example: share of deposits, repeat purchases, client LTV</i>";

pub const CONDITIONS_HYBRID: &str = "<b>🔄 Hybrid model (CPA + RS)</b>\n\n\
🎯 <b>The balance for maximum efficiency</b>\n\n\
✅ <b>Advantages:</b>\n\
• Stability of CPA with the upside of RS\n\
• Flexible terms for your goals\n\
• Individual approach\n\
• Optimal risk/return\n\n\
💫 <b>Options:</b>\n\
• CPA plus a share of turnover\n\
• Fixed bonus for quality\n\
• Multi-level reward system\n\n\
👥 <b>Discuss individual terms:</b>\n\
• @makswincraft 🚀\n\
• @dosiTG 💼\n\
• @hugewinaffs 🌟\n\n\
<i>Example: fixed fee per registration plus % of turnover, tiered system</i>";

pub const CONTACTS: &str = "📞 Support contacts\n\n\
We are always in touch and ready to help, any time!\n\n\
🕒 Working 24/7\n\
Your request will be handled as fast as possible.\n\n\
👨‍💼 Your personal managers:\n\
• @makswincraft 🚀\n\
• @dosiTG 💼\n\
• @hugewinaffs 🌟\n\n\
Write to us, we aim for a long and mutually beneficial partnership!";

pub const MATERIALS: &str = "📚 Useful materials\n\nChoose a section:";
pub const LANDINGS: &str = "🔗 Available landings and demo games";
pub const DEMOS: &str = "🎮 Demo versions of popular slots";

pub const FAQ: &str = "❓ Frequently asked questions\n\n\
01. Which leads are not paid?\n\
— Motivated traffic\n\
— Multi-accounts (one ID/IP/device → several registrations)\n\
— Leads with a suspicious funnel (many registrations, no deposits)\n\n\
02. Is traffic judged per stream or per player?\n\
— Every player is judged individually. If 12 of 20 made an FTD, we pay for 12.\n\n\
03. Is there a hold on players?\n\
— No. Every FTD made before the end of the reporting period is paid.\n\n\
04. How many days from click to deposit?\n\
— At most 30 days. A deposit within that window makes the lead valid.\n\n\
05. Reconciliation and payout schedule?\n\
— Reconciliation by the end of the month, payout by the 10th of the next month.\n\
— On large volumes, payouts 2–3 times a month are possible.\n\n\
06. Test caps?\n\
— 10–20 FTD for a test, then up to 100 FTD. No limits with good quality.\n\n\
07. Minimum payout?\n\
— 500 USD.\n\n\
08. Payment methods?\n\
— USDT / USDC. No invoice, KYC or AML required.\n\n\
09. Postback delay?\n\
— Minimal. Data is updated 24/7 in real time.\n\n\
10. Traffic evaluation criteria?\n\
— CR click → registration / FTD\n\
— Share of active players and retention\n\
— Refund ratio\n\
— Sources, GEO, devices, stability of volumes\n\n\
11. Registration in one period, deposit in the next?\n\
— The FTD counts in the deposit period (within 30 days) and is paid.\n\n\
12. How is overflow paid?\n\
— Only by agreement. Quality overflow is paid.\n\n\
13. Targets after 30 days?\n\
— RetDep ≥30% of FTD\n\
— Average check x2–x2.5 of the minimum deposit\n\n\
16. KPI during the test?\n\
— Not blocking during the test. Guidelines:\n\
  • CR click → registration: 20–30%\n\
  • CR registration → deposit: 5–10%\n\
  • Retention Day 7: from 25%\n\
— Valid FTDs are paid in any case.\n\n\
17. Do you accept influencers and PPS brand traffic?\n\
— PPC, SEO, Facebook: yes. Influencers and PPS brand: by agreement.\n\n\
18. Hard and soft KPI?\n\
— Soft: CR reg 20–30%, CR FTD 5–10%, Ret7 >25%\n\
— Hard: RetDep >30%, ARPU ≥x2 of min. deposit, ROI on D7/D14\n\n\
Contacts for details:\n\
@makswincraft | @dosiTG | @hugewinaffs";

pub const STATS_30: &str = "<b>📊 Statistics for 30 days</b>\n\n\
📆 Data is updated on the 1st and 15th of every month.\n\n\
🖼️ Coming soon: Click2Reg and Reg2Dep charts!";

pub const STATS_7: &str = "<b>📈 Statistics for 7 days</b>\n\n\
📆 Data is updated every Monday morning.\n\n\
🖼️ Coming soon: weekly conversion charts!";

pub const UNRECOGNIZED: &str = "🤷 Unrecognized command. Use the main menu to continue.";
